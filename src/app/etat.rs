//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’état du noyau (`EtatCalc`) + les préférences d’affichage,
//! et relayer les actions boutons/clavier vers le noyau.
//!
//! Contrats :
//! - Aucune évaluation ici (tout passe par `EtatCalc`).
//! - Le thème n’influence jamais le calcul.

use crate::noyau::{EtatCalc, Operateur};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Sombre,
    Clair,
}

impl Theme {
    pub fn bascule(self) -> Self {
        match self {
            Theme::Sombre => Theme::Clair,
            Theme::Clair => Theme::Sombre,
        }
    }
}

/// Action discrète (bouton ou touche).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Chiffre(char),
    Operateur(Operateur),
    Calculer,
    Backspace,
    Clear,
    ClearAll,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- noyau ---
    pub calc: EtatCalc,

    // --- préférences ---
    pub theme: Theme,

    // vrai tant que `theme` n’a pas été poussé dans le contexte egui
    pub theme_a_appliquer: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            calc: EtatCalc::new(),
            theme: Theme::Sombre,
            theme_a_appliquer: true,
        }
    }
}

impl AppCalc {
    /// Démarre avec le thème courant du contexte (celui du système si eframe l’a détecté).
    pub fn new(theme_sombre: bool) -> Self {
        Self {
            theme: if theme_sombre {
                Theme::Sombre
            } else {
                Theme::Clair
            },
            ..Self::default()
        }
    }

    pub fn appliquer(&mut self, action: Action) {
        match action {
            Action::Chiffre(c) => self.calc.ajouter_chiffre(c),
            Action::Operateur(op) => self.calc.ajouter_operateur(op),
            Action::Calculer => self.calc.calculer(),
            Action::Backspace => self.calc.backspace(),
            Action::Clear => self.calc.clear(),
            Action::ClearAll => self.calc.clear_all(),
        }
    }

    pub fn basculer_theme(&mut self) {
        self.theme = self.theme.bascule();
        self.theme_a_appliquer = true;
    }

    /// Ligne principale : nombre en cours / résultat / message ; "0" si vide.
    pub fn ecran(&self) -> &str {
        if self.calc.entree.is_empty() {
            "0"
        } else {
            &self.calc.entree
        }
    }
}
