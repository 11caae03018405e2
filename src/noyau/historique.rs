//! Historique borné des calculs réussis (FIFO : le plus ancien sort en premier).

use std::collections::VecDeque;

/// Nombre maximal d’entrées conservées.
pub const CAPACITE_HISTORIQUE: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
}

impl Historique {
    /// Ajoute une entrée ; évince la plus ancienne si la capacité est dépassée.
    pub fn ajouter(&mut self, expression: impl Into<String>, resultat: impl Into<String>) {
        self.entrees.push_back(EntreeHistorique {
            expression: expression.into(),
            resultat: resultat.into(),
        });
        while self.entrees.len() > CAPACITE_HISTORIQUE {
            self.entrees.pop_front();
        }
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Du plus ancien au plus récent.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }
}
