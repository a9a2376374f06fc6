//! src/noyau/evaluation.rs
//!
//! Évaluation flottante + format d’affichage.
//!
//! Règle de format (fixée, les tests s’y accrochent) : la représentation
//! décimale la plus courte qui re-parse à l’identique, c’est-à-dire le
//! Display de f64 ("3" et pas "3.0" ; "0.30000000000000004" pour 0.1+0.2).

use super::machine::Operation;

/// Marqueur d’erreur affiché après une division par zéro.
/// C’est une VALEUR, pas un échec : il circule dans l’état comme
/// n’importe quel autre texte, jusqu’à AC.
pub const MARQUEUR_ERREUR: &str = "Error";

/// Évalue `gauche op droite` sur des f64 et rend le texte à afficher.
///
/// Repli défensif : si un opérande ne se parse pas (ex: le marqueur
/// d’erreur), on retourne `droite` inchangé. Avec les invariants du
/// noyau ça ne se produit qu’après une division par zéro.
pub fn evalue(gauche: &str, droite: &str, op: Operation) -> String {
    let (Some(a), Some(b)) = (parse_nombre(gauche), parse_nombre(droite)) else {
        return droite.to_string();
    };

    match op {
        Operation::Plus => format_nombre(a + b),
        Operation::Moins => format_nombre(a - b),
        Operation::Fois => format_nombre(a * b),
        Operation::Divise => {
            if b == 0.0 {
                MARQUEUR_ERREUR.to_string()
            } else {
                format_nombre(a / b)
            }
        }
    }
}

/// Parse un opérande. NaN compte comme un échec de parse : le parseur f64
/// de Rust accepte le littéral "NaN", pas celui du navigateur.
fn parse_nombre(s: &str) -> Option<f64> {
    match s.parse::<f64>() {
        Ok(v) if !v.is_nan() => Some(v),
        _ => None,
    }
}

fn format_nombre(v: f64) -> String {
    v.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entiers_affiches_sans_point() {
        assert_eq!(evalue("5", "3", Operation::Plus), "8");
        assert_eq!(evalue("4", "2", Operation::Fois), "8");
    }

    #[test]
    fn resultat_negatif() {
        assert_eq!(evalue("2", "5", Operation::Moins), "-3");
    }

    #[test]
    fn division_decimale() {
        assert_eq!(evalue("1", "8", Operation::Divise), "0.125");
    }

    #[test]
    fn division_par_zero_donne_le_marqueur() {
        assert_eq!(evalue("8", "0", Operation::Divise), MARQUEUR_ERREUR);
        // Zéro tapé avec un point : c’est toujours zéro.
        assert_eq!(evalue("8", "0.", Operation::Divise), MARQUEUR_ERREUR);
    }

    #[test]
    fn artefacts_flottants_visibles() {
        // Le format est le Display de f64, artefacts binaires compris.
        assert_eq!(evalue("0.1", "0.2", Operation::Plus), "0.30000000000000004");
    }

    #[test]
    fn point_final_tolere() {
        // "3." se parse comme 3 : taper "." sans décimale derrière est légal.
        assert_eq!(evalue("3.", "2", Operation::Plus), "5");
    }

    #[test]
    fn operande_non_numerique_rend_le_droit() {
        assert_eq!(evalue(MARQUEUR_ERREUR, "5", Operation::Plus), "5");
        assert_eq!(evalue("5", MARQUEUR_ERREUR, Operation::Plus), MARQUEUR_ERREUR);
        // "NaN" se parse en f64 mais doit suivre le même repli.
        assert_eq!(evalue("NaN", "7", Operation::Fois), "7");
    }
}
