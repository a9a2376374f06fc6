//! src/noyau/machine.rs
//!
//! État de saisie + transitions pures.
//!
//! Contrats (version noyau) :
//! - Chaque touche appliquée à chaque état produit un état suivant bien
//!   défini (au pire un no-op). Aucune transition n’échoue, rien ne panique.
//! - Transitions pures : on retourne un NOUVEL état complet, jamais une
//!   mutation partielle.
//! - `valeur_courante` n’est jamais vide ("0" quand rien n’est tapé) et
//!   contient au plus un point décimal.

use super::evaluation::evalue;

/// Valeur affichée au démarrage (et après AC).
pub const VALEUR_INITIALE: &str = "0";

/// Opérateur en attente (choisi mais pas encore appliqué).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operation {
    /// Symbole affiché sur le bouton correspondant.
    /// Seul endroit où vivent les quatre glyphes acceptés.
    pub fn symbole(self) -> &'static str {
        match self {
            Operation::Plus => "+",
            Operation::Moins => "-",
            Operation::Fois => "×",
            Operation::Divise => "÷",
        }
    }
}

/// L’état complet de la calculatrice : tout ce qu’il faut pour afficher
/// et pour calculer la transition suivante.
#[derive(Clone, Debug, PartialEq)]
pub struct EtatSaisie {
    /// Texte de la valeur en cours de frappe (ou dernier résultat).
    pub valeur_courante: String,

    /// Opérande gauche, capturé au choix d’un opérateur. Vide sinon.
    pub valeur_precedente: String,

    /// Opérateur en attente, s’il y en a un.
    pub operation: Option<Operation>,

    /// true juste après un opérateur ou un résultat : le prochain chiffre
    /// démarre un nombre neuf au lieu de s’ajouter à la fin.
    pub raz_prochaine_saisie: bool,
}

impl Default for EtatSaisie {
    fn default() -> Self {
        Self {
            valeur_courante: VALEUR_INITIALE.to_string(),
            valeur_precedente: String::new(),
            operation: None,
            raz_prochaine_saisie: false,
        }
    }
}

impl EtatSaisie {
    /* ------------------------ Touches (transitions pures) ------------------------ */

    /// Chiffre '0'..='9'. Tout autre caractère : no-op (défense en profondeur,
    /// la vue n’envoie que des chiffres).
    pub fn chiffre(&self, c: char) -> EtatSaisie {
        if !c.is_ascii_digit() {
            return self.clone();
        }

        if self.raz_prochaine_saisie {
            return EtatSaisie {
                valeur_courante: c.to_string(),
                raz_prochaine_saisie: false,
                ..self.clone()
            };
        }

        // "0" puis un chiffre => on remplace (pas de zéros de tête).
        if self.valeur_courante == VALEUR_INITIALE {
            return EtatSaisie {
                valeur_courante: c.to_string(),
                ..self.clone()
            };
        }

        let mut v = self.valeur_courante.clone();
        v.push(c);
        EtatSaisie {
            valeur_courante: v,
            ..self.clone()
        }
    }

    /// Point décimal. Au plus un '.' dans la valeur courante.
    pub fn decimale(&self) -> EtatSaisie {
        if self.raz_prochaine_saisie {
            return EtatSaisie {
                valeur_courante: "0.".to_string(),
                raz_prochaine_saisie: false,
                ..self.clone()
            };
        }

        if self.valeur_courante.contains('.') {
            return self.clone();
        }

        let mut v = self.valeur_courante.clone();
        v.push('.');
        EtatSaisie {
            valeur_courante: v,
            ..self.clone()
        }
    }

    /// DEL : retire le dernier caractère ; retombe sur "0" plutôt que sur
    /// une chaîne vide. Ne touche ni à l’opérateur en attente, ni à
    /// l’opérande gauche, ni au drapeau de remise à neuf.
    pub fn retour_arriere(&self) -> EtatSaisie {
        if self.valeur_courante.chars().count() <= 1 {
            return EtatSaisie {
                valeur_courante: VALEUR_INITIALE.to_string(),
                ..self.clone()
            };
        }

        let mut v = self.valeur_courante.clone();
        v.pop();
        EtatSaisie {
            valeur_courante: v,
            ..self.clone()
        }
    }

    /// Choix d’un opérateur. Deux cas :
    ///
    /// - enchaînement : un opérateur était déjà en attente ET un second
    ///   opérande a été tapé => on évalue d’abord, et le résultat devient
    ///   l’opérande gauche du nouvel opérateur ;
    /// - substitution : sinon (rien en attente, ou l’utilisateur vient
    ///   d’appuyer sur un opérateur ou sur "=" sans retaper de chiffre),
    ///   l’opérateur en attente est simplement remplacé, sans réévaluer.
    pub fn operateur(&self, op: Operation) -> EtatSaisie {
        if let Some(en_attente) = self.operation {
            if !self.valeur_precedente.is_empty() && !self.raz_prochaine_saisie {
                let resultat = evalue(&self.valeur_precedente, &self.valeur_courante, en_attente);
                return EtatSaisie {
                    valeur_courante: resultat.clone(),
                    valeur_precedente: resultat,
                    operation: Some(op),
                    raz_prochaine_saisie: true,
                };
            }
        }

        EtatSaisie {
            valeur_courante: self.valeur_courante.clone(),
            valeur_precedente: self.valeur_courante.clone(),
            operation: Some(op),
            raz_prochaine_saisie: true,
        }
    }

    /// "=" : applique l’opérateur en attente. No-op s’il n’y a rien à
    /// appliquer (pas d’opérateur, ou pas d’opérande gauche).
    pub fn egal(&self) -> EtatSaisie {
        let Some(op) = self.operation else {
            return self.clone();
        };
        if self.valeur_precedente.is_empty() {
            return self.clone();
        }

        let resultat = evalue(&self.valeur_precedente, &self.valeur_courante, op);
        EtatSaisie {
            valeur_courante: resultat,
            valeur_precedente: String::new(),
            operation: None,
            raz_prochaine_saisie: true,
        }
    }

    /// AC : retour à l’état initial, quel que soit l’état courant.
    pub fn efface_tout(&self) -> EtatSaisie {
        EtatSaisie::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chiffre_remplace_le_zero_de_tete() {
        let e = EtatSaisie::default().chiffre('0').chiffre('0');
        assert_eq!(e.valeur_courante, "0", "pas de \"00\"");

        let e = EtatSaisie::default().chiffre('0').chiffre('7');
        assert_eq!(e.valeur_courante, "7");
    }

    #[test]
    fn chiffre_ajoute_en_fin_sinon() {
        let e = EtatSaisie::default().chiffre('1').chiffre('2').chiffre('3');
        assert_eq!(e.valeur_courante, "123");
    }

    #[test]
    fn chiffre_apres_operateur_demarre_un_nombre_neuf() {
        let e = EtatSaisie::default()
            .chiffre('5')
            .operateur(Operation::Plus)
            .chiffre('3');
        assert_eq!(e.valeur_courante, "3");
        assert_eq!(e.valeur_precedente, "5");
        assert!(!e.raz_prochaine_saisie, "le drapeau doit retomber");
    }

    #[test]
    fn chiffre_hors_domaine_est_un_no_op() {
        let avant = EtatSaisie::default().chiffre('4');
        let apres = avant.chiffre('x');
        assert_eq!(avant, apres);
    }

    #[test]
    fn decimale_au_plus_un_point() {
        let e = EtatSaisie::default().chiffre('1').decimale().decimale();
        assert_eq!(e.valeur_courante, "1.");
    }

    #[test]
    fn decimale_apres_operateur_donne_zero_point() {
        let e = EtatSaisie::default()
            .chiffre('5')
            .operateur(Operation::Plus)
            .decimale();
        assert_eq!(e.valeur_courante, "0.");
        assert!(!e.raz_prochaine_saisie);
    }

    #[test]
    fn retour_arriere_retombe_sur_zero() {
        let e = EtatSaisie::default().chiffre('7').retour_arriere();
        assert_eq!(e.valeur_courante, "0", "jamais de chaîne vide");
    }

    #[test]
    fn retour_arriere_conserve_le_contexte() {
        // DEL ne touche ni au drapeau, ni à l’opérateur en attente.
        let e = EtatSaisie::default()
            .chiffre('5')
            .operateur(Operation::Plus)
            .retour_arriere();
        assert_eq!(e.valeur_courante, "0");
        assert_eq!(e.valeur_precedente, "5");
        assert_eq!(e.operation, Some(Operation::Plus));
        assert!(e.raz_prochaine_saisie);
    }

    #[test]
    fn operateur_sans_second_operande_substitue() {
        let e = EtatSaisie::default()
            .chiffre('5')
            .operateur(Operation::Plus)
            .operateur(Operation::Fois);
        // Pas de réévaluation : seul l’opérateur change.
        assert_eq!(e.valeur_courante, "5");
        assert_eq!(e.valeur_precedente, "5");
        assert_eq!(e.operation, Some(Operation::Fois));
    }

    #[test]
    fn egal_sans_operateur_est_un_no_op() {
        let avant = EtatSaisie::default();
        let apres = avant.egal();
        assert_eq!(avant, apres);
    }

    #[test]
    fn efface_tout_retourne_l_etat_initial() {
        let e = EtatSaisie::default()
            .chiffre('8')
            .operateur(Operation::Divise)
            .chiffre('0')
            .egal()
            .efface_tout();
        assert_eq!(e, EtatSaisie::default());
    }

    #[test]
    fn symboles_des_quatre_operations() {
        assert_eq!(Operation::Plus.symbole(), "+");
        assert_eq!(Operation::Moins.symbole(), "-");
        assert_eq!(Operation::Fois.symbole(), "×");
        assert_eq!(Operation::Divise.symbole(), "÷");
    }
}
