// src/noyau/jetons.rs
//
// Jetons de l’expression en cours : nombres (texte brut, pas encore parsé)
// et opérateurs binaires. Variantes typées => pas de re-parsing ambigu.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// Opérateur inconnu (ni `+`, ni `-`, ni `*`, ni `/`).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("opérateur inconnu : {0:?}")]
pub struct OperateurInconnu(pub String);

impl FromStr for Operateur {
    type Err = OperateurInconnu;

    /// Accepte la forme “rembourrée” du clavier (" + ") : on retire les espaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operateur::Plus),
            "-" => Ok(Operateur::Moins),
            "*" => Ok(Operateur::Fois),
            "/" => Ok(Operateur::Divise),
            autre => Err(OperateurInconnu(autre.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    Nombre(String),
    Operateur(Operateur),
}

impl Jeton {
    pub fn est_operateur(&self) -> bool {
        matches!(self, Jeton::Operateur(_))
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(txt) => f.write_str(txt),
            Jeton::Operateur(op) => write!(f, "{op}"),
        }
    }
}

/// Texte d’expression (affichage + historique) : jetons séparés par un espace.
///
/// Exemple : [2, +, 3, *, 4] -> "2 + 3 * 4"
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| j.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
