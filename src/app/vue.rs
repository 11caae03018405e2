// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : ligne d’expression + ligne principale
// - Tactile : gros boutons (pavé 4 colonnes)
// - Historique : 10 derniers calculs, le plus récent en haut
//
// Mode immédiat : tout est relu depuis l’état à chaque frame,
// donc chaque action est visible dès la frame suivante.

use eframe::egui;

use super::etat::{Action, AppCalc, Theme};
use crate::noyau::Operateur;

const TAILLE_TOUCHE: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Calculatrice");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let libelle = match self.theme {
                            Theme::Sombre => "Clair",
                            Theme::Clair => "Sombre",
                        };
                        if ui.button(libelle).on_hover_text("Thème clair/sombre").clicked() {
                            self.basculer_theme();
                        }
                    });
                });
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Ligne d’expression (jetons validés + nombre en cours)
                    ui.label(
                        egui::RichText::new(self.calc.ligne_expression())
                            .monospace()
                            .weak(),
                    );
                    // Ligne principale
                    ui.label(egui::RichText::new(self.ecran()).monospace().size(30.0));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche(ui, "C", Action::Clear);
                self.touche(ui, "AC", Action::ClearAll);
                self.touche(ui, "DEL", Action::Backspace);
                self.touche(ui, "/", Action::Operateur(Operateur::Divise));
                ui.end_row();

                self.touche(ui, "7", Action::Chiffre('7'));
                self.touche(ui, "8", Action::Chiffre('8'));
                self.touche(ui, "9", Action::Chiffre('9'));
                self.touche(ui, "*", Action::Operateur(Operateur::Fois));
                ui.end_row();

                self.touche(ui, "4", Action::Chiffre('4'));
                self.touche(ui, "5", Action::Chiffre('5'));
                self.touche(ui, "6", Action::Chiffre('6'));
                self.touche(ui, "-", Action::Operateur(Operateur::Moins));
                ui.end_row();

                self.touche(ui, "1", Action::Chiffre('1'));
                self.touche(ui, "2", Action::Chiffre('2'));
                self.touche(ui, "3", Action::Chiffre('3'));
                self.touche(ui, "+", Action::Operateur(Operateur::Plus));
                ui.end_row();

                self.touche(ui, "0", Action::Chiffre('0'));
                self.touche(ui, ".", Action::Chiffre('.'));
                ui.label("");
                self.touche(ui, "=", Action::Calculer);
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.calc.historique.is_empty() {
                    ui.weak("aucun calcul");
                    return;
                }
                for e in self.calc.historique.iter().rev() {
                    ui.monospace(format!("{} = {}", e.expression, e.resultat));
                }
            });
    }

    fn touche(&mut self, ui: &mut egui::Ui, label: &str, action: Action) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
        if resp.clicked() {
            self.appliquer(action);
        }
    }
}
