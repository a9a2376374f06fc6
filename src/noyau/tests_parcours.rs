//! Tests de parcours : on rejoue des suites de touches complètes et on
//! vérifie ce que l’écran afficherait, comme le ferait un utilisateur.
//!
//! Script de touches (une touche = un caractère) :
//! - '0'..='9' : chiffre
//! - '.'       : point décimal
//! - '+' '-'   : opérateur
//! - 'x'       : × (multiplication)
//! - '/'       : ÷ (division)
//! - '='       : égal
//! - '<'       : retour arrière (DEL)
//! - 'C'       : efface tout (AC)

use super::evaluation::MARQUEUR_ERREUR;
use super::machine::{EtatSaisie, Operation};

fn tape(touches: &str) -> EtatSaisie {
    let mut etat = EtatSaisie::default();
    for t in touches.chars() {
        etat = match t {
            '0'..='9' => etat.chiffre(t),
            '.' => etat.decimale(),
            '+' => etat.operateur(Operation::Plus),
            '-' => etat.operateur(Operation::Moins),
            'x' => etat.operateur(Operation::Fois),
            '/' => etat.operateur(Operation::Divise),
            '=' => etat.egal(),
            '<' => etat.retour_arriere(),
            'C' => etat.efface_tout(),
            autre => panic!("touche inconnue dans le script: {autre:?}"),
        };
    }
    etat
}

fn affiche(touches: &str) -> String {
    tape(touches).valeur_courante
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn zeros_de_tete_absorbes() {
    assert_eq!(affiche("00"), "0");
    assert_eq!(affiche("007"), "7");
}

#[test]
fn saisie_simple() {
    assert_eq!(affiche("123"), "123");
    assert_eq!(affiche("12.5"), "12.5");
}

#[test]
fn deux_points_impossible() {
    assert_eq!(affiche("1..5"), "1.5");
}

#[test]
fn retour_arriere_sur_un_caractere() {
    assert_eq!(affiche("7<"), "0");
    assert_eq!(affiche("75<"), "7");
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn addition_simple() {
    assert_eq!(affiche("5+3="), "8");
}

#[test]
fn soustraction_negative() {
    assert_eq!(affiche("2-5="), "-3");
}

#[test]
fn division_decimale() {
    assert_eq!(affiche("1/8="), "0.125");
}

#[test]
fn decimale_apres_operateur() {
    // '+' arme la remise à neuf, '.' doit repartir de "0."
    assert_eq!(affiche("5+.5="), "5.5");
}

#[test]
fn artefacts_flottants_affiches_tels_quels() {
    assert_eq!(affiche("0.1+0.2="), "0.30000000000000004");
}

/* ------------------------ Enchaînement / substitution ------------------------ */

#[test]
fn enchainement_d_operateurs() {
    // 5+3 est évalué au moment du ×, puis 8×2 au moment du =.
    assert_eq!(affiche("5+3x2="), "16");
}

#[test]
fn substitution_d_operateur() {
    // Deux opérateurs de suite : le second remplace le premier, sans évaluer.
    assert_eq!(affiche("5+x3="), "15");
}

#[test]
fn egal_sans_operateur_ne_change_rien() {
    assert_eq!(tape("="), EtatSaisie::default());
    assert_eq!(affiche("12="), "12");
}

#[test]
fn egal_repete_ne_reevalue_pas() {
    // Après un premier "=", plus d’opérateur en attente : no-op.
    assert_eq!(affiche("5+3=="), "8");
}

#[test]
fn chiffre_apres_resultat_repart_a_neuf() {
    assert_eq!(affiche("5+3=2"), "2");
}

#[test]
fn operateur_apres_egal_repart_du_resultat() {
    assert_eq!(affiche("5+3=+2="), "10");
}

#[test]
fn retour_arriere_n_efface_pas_le_calcul_en_attente() {
    // DEL après '+' laisse l’opération 5+… armée.
    assert_eq!(affiche("5+<3="), "8");
}

/* ------------------------ Division par zéro ------------------------ */

#[test]
fn division_par_zero_affiche_le_marqueur() {
    assert_eq!(affiche("8/0="), MARQUEUR_ERREUR);
}

#[test]
fn division_par_zero_en_enchainement() {
    // L’erreur apparaît dès l’opérateur suivant, pas seulement au "=".
    assert_eq!(affiche("8/0+"), MARQUEUR_ERREUR);
}

#[test]
fn apres_le_marqueur_l_operande_droit_l_emporte() {
    // evalue("Error", "5", +) ne se parse pas à gauche => "5" inchangé.
    assert_eq!(affiche("8/0=+5="), "5");
}

#[test]
fn efface_tout_sort_de_l_erreur() {
    assert_eq!(tape("8/0=C"), EtatSaisie::default());
    assert_eq!(affiche("8/0=C1+2="), "3");
}

/* ------------------------ AC ------------------------ */

#[test]
fn efface_tout_depuis_n_importe_ou() {
    assert_eq!(tape("5+3C"), EtatSaisie::default());
    assert_eq!(tape("12.5<C"), EtatSaisie::default());
    assert_eq!(tape("C"), EtatSaisie::default());
}
