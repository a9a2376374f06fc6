// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Tactile : gros boutons, grille 4 colonnes façon calculatrice de poche
// - Aucune logique arithmétique ici : la vue lit affichage() et envoie
//   des intentions (chiffre / opérateur / égal / …) à l’état.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Operation;

/// Taille d’un bouton du pavé (assez gros pour le tactile).
const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /// Écran : la valeur courante, en gros, alignée à droite.
    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(self.affichage()).monospace().size(30.0));
                });
            });
    }

    /// Pavé : disposition classique
    ///   AC DEL ÷ ×
    ///    7  8  9 -
    ///    4  5  6 +
    ///    1  2  3 =
    ///    0  .
    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "AC", "Remise à zéro totale", Touche::EffaceTout);
                self.bouton(ui, "DEL", "Efface le dernier chiffre", Touche::RetourArriere);
                self.bouton_operateur(ui, Operation::Divise, "Division");
                self.bouton_operateur(ui, Operation::Fois, "Multiplication");
                ui.end_row();

                self.bouton(ui, "7", "", Touche::Chiffre('7'));
                self.bouton(ui, "8", "", Touche::Chiffre('8'));
                self.bouton(ui, "9", "", Touche::Chiffre('9'));
                self.bouton_operateur(ui, Operation::Moins, "Soustraction");
                ui.end_row();

                self.bouton(ui, "4", "", Touche::Chiffre('4'));
                self.bouton(ui, "5", "", Touche::Chiffre('5'));
                self.bouton(ui, "6", "", Touche::Chiffre('6'));
                self.bouton_operateur(ui, Operation::Plus, "Addition");
                ui.end_row();

                self.bouton(ui, "1", "", Touche::Chiffre('1'));
                self.bouton(ui, "2", "", Touche::Chiffre('2'));
                self.bouton(ui, "3", "", Touche::Chiffre('3'));
                self.bouton(ui, "=", "Applique l’opération en attente", Touche::Egal);
                ui.end_row();

                self.bouton(ui, "0", "", Touche::Chiffre('0'));
                self.bouton(ui, ".", "Point décimal", Touche::Decimale);
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton_operateur(&mut self, ui: &mut egui::Ui, op: Operation, tip: &str) {
        self.bouton(ui, op.symbole(), tip, Touche::Operateur(op));
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let mut resp = ui.add_sized(
            TAILLE_BOUTON,
            egui::Button::new(egui::RichText::new(label).size(20.0)),
        );
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }

        if resp.clicked() {
            match touche {
                Touche::Chiffre(c) => self.appuie_chiffre(c),
                Touche::Decimale => self.appuie_decimale(),
                Touche::RetourArriere => self.appuie_retour_arriere(),
                Touche::Operateur(op) => self.appuie_operateur(op),
                Touche::Egal => self.appuie_egal(),
                Touche::EffaceTout => self.appuie_efface_tout(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Decimale,
    RetourArriere,
    Operateur(Operation),
    Egal,
    EffaceTout,
}
