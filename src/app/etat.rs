//! src/app/etat.rs
//!
//! État UI (sans vue, sans arithmétique).
//!
//! Rôle : posséder l’EtatSaisie du noyau et exposer les intentions des
//! boutons. Chaque intention REMPLACE l’état en entier par celui que le
//! noyau retourne — transition pure, jamais de mutation partielle.
//!
//! Contrats (version UI) :
//! - Aucune évaluation ici (pas de parse, pas de f64).
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::{EtatSaisie, Operation};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    etat: EtatSaisie,
}

impl AppCalc {
    /* ------------------------ Lecture (pour la vue) ------------------------ */

    /// Texte à afficher dans l’écran de la calculatrice.
    pub fn affichage(&self) -> &str {
        &self.etat.valeur_courante
    }

    /* ------------------------ Intentions “boutons” ------------------------ */

    pub fn appuie_chiffre(&mut self, c: char) {
        self.etat = self.etat.chiffre(c);
    }

    pub fn appuie_decimale(&mut self) {
        self.etat = self.etat.decimale();
    }

    pub fn appuie_retour_arriere(&mut self) {
        self.etat = self.etat.retour_arriere();
    }

    pub fn appuie_operateur(&mut self, op: Operation) {
        self.etat = self.etat.operateur(op);
    }

    pub fn appuie_egal(&mut self) {
        self.etat = self.etat.egal();
    }

    pub fn appuie_efface_tout(&mut self) {
        self.etat = self.etat.efface_tout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affichage_initial() {
        assert_eq!(AppCalc::default().affichage(), "0");
    }

    #[test]
    fn les_intentions_remplacent_l_etat() {
        let mut app = AppCalc::default();
        app.appuie_chiffre('1');
        app.appuie_operateur(Operation::Plus);
        app.appuie_chiffre('2');
        app.appuie_egal();
        assert_eq!(app.affichage(), "3");

        app.appuie_efface_tout();
        assert_eq!(app.affichage(), "0");
    }
}
