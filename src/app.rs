// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier en actions (pas de champ texte : clavier global)
//
// Clavier:
//   0-9 .        -> chiffre / point
//   + - * /      -> opérateur (forme " + " puis trim)
//   Enter        -> calcul
//   Backspace    -> DEL
//   Escape       -> C
//   Shift+Escape -> AC

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::{Action, AppCalc, Theme};

use eframe::egui;

use crate::noyau::Operateur;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.theme_a_appliquer {
            ctx.set_visuals(match self.theme {
                Theme::Sombre => egui::Visuals::dark(),
                Theme::Clair => egui::Visuals::light(),
            });
            self.theme_a_appliquer = false;
        }

        let actions = ctx.input(|i| actions_clavier(&i.events));
        for a in actions {
            self.appliquer(a);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Événements egui de la frame -> actions calculatrice (dans l’ordre).
pub fn actions_clavier(events: &[egui::Event]) -> Vec<Action> {
    let mut out = Vec::new();

    for ev in events {
        match ev {
            egui::Event::Text(txt) => {
                out.extend(txt.chars().filter_map(action_caractere));
            }
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => match key {
                egui::Key::Enter => out.push(Action::Calculer),
                egui::Key::Backspace => out.push(Action::Backspace),
                egui::Key::Escape if modifiers.shift => out.push(Action::ClearAll),
                egui::Key::Escape => out.push(Action::Clear),
                _ => {}
            },
            _ => {}
        }
    }

    out
}

fn action_caractere(c: char) -> Option<Action> {
    if c.is_ascii_digit() || c == '.' {
        return Some(Action::Chiffre(c));
    }
    format!(" {c} ")
        .parse::<Operateur>()
        .ok()
        .map(Action::Operateur)
}
