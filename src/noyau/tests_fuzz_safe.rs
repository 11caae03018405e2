//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’évaluateur et le constructeur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur d’expression bornée
//! - budget temps global
//! - invariant clé (évaluateur) : même résultat qu’une réduction de référence
//!   indépendante (pile de termes signés)
//! - invariant clé (constructeur) : jetons alternés, jamais d’opérateur en tête,
//!   jamais deux opérateurs adjacents, historique ≤ capacité

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::etat::EtatCalc;
use super::eval::evaluer;
use super::historique::CAPACITE_HISTORIQUE;
use super::jetons::{Jeton, Operateur};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

const OPS: [Operateur; 4] = [
    Operateur::Plus,
    Operateur::Moins,
    Operateur::Fois,
    Operateur::Divise,
];

fn gen_nombre(rng: &mut Rng) -> String {
    // petits entiers (0 inclus => divisions par zéro), parfois un décimal
    let n = rng.pick(10);
    match rng.pick(4) {
        0 => format!("{n}.5"),
        _ => format!("{n}"),
    }
}

fn gen_expression(rng: &mut Rng, max_ops: u32) -> Vec<Jeton> {
    let mut out = vec![Jeton::Nombre(gen_nombre(rng))];
    for _ in 0..rng.pick(max_ops + 1) {
        out.push(Jeton::Operateur(OPS[rng.pick(4) as usize]));
        out.push(Jeton::Nombre(gen_nombre(rng)));
    }
    out
}

/* ------------------------ Référence indépendante ------------------------ */

/// Réduction “pile de termes signés” : chaque + / - ouvre un terme,
/// chaque * / / modifie le terme au sommet ; somme finale.
fn reference(jetons: &[Jeton]) -> Option<f64> {
    let mut termes: Vec<f64> = Vec::new();
    let mut op_en_attente: Option<Operateur> = None;

    for j in jetons {
        match j {
            Jeton::Operateur(op) => op_en_attente = Some(*op),
            Jeton::Nombre(txt) => {
                let n: f64 = txt.parse().ok()?;
                match op_en_attente.take() {
                    None | Some(Operateur::Plus) => termes.push(n),
                    Some(Operateur::Moins) => termes.push(-n),
                    Some(Operateur::Fois) => *termes.last_mut()? *= n,
                    Some(Operateur::Divise) => {
                        if n == 0.0 {
                            return None;
                        }
                        *termes.last_mut()? /= n;
                    }
                }
            }
        }
    }

    let (premier, reste) = termes.split_first()?;
    Some(reste.iter().fold(*premier, |acc, t| acc + t))
}

fn contient_division_par_zero(jetons: &[Jeton]) -> bool {
    jetons.windows(2).any(|w| {
        matches!(
            (&w[0], &w[1]),
            (Jeton::Operateur(Operateur::Divise), Jeton::Nombre(n)) if n.parse::<f64>() == Ok(0.0)
        )
    })
}

/* ------------------------ Évaluateur ------------------------ */

#[test]
fn fuzz_eval_vs_reference() {
    let t0 = Instant::now();
    let max = Duration::from_secs(3);
    let mut rng = Rng::new(0x00C0_FFEE);

    for _ in 0..4000 {
        budget(t0, max);

        let jetons = gen_expression(&mut rng, 6);
        match evaluer(&jetons) {
            Ok(v) => {
                let r = reference(&jetons)
                    .unwrap_or_else(|| panic!("référence impossible: {jetons:?}"));
                let tol = 1e-9 * r.abs().max(1.0);
                assert!(
                    (v - r).abs() <= tol,
                    "jetons={jetons:?} eval={v} ref={r}"
                );
            }
            Err(ErreurCalcul::DivisionParZero) => {
                assert!(
                    contient_division_par_zero(&jetons),
                    "DivisionParZero sans / 0 : {jetons:?}"
                );
            }
            Err(e) => panic!("erreur inattendue: {e} jetons={jetons:?}"),
        }
    }
}

#[test]
fn fuzz_eval_deterministe() {
    let mut a = Rng::new(7);
    let mut b = Rng::new(7);

    for _ in 0..500 {
        let ja = gen_expression(&mut a, 5);
        let jb = gen_expression(&mut b, 5);
        assert_eq!(ja, jb);
        assert_eq!(evaluer(&ja), evaluer(&jb), "jetons={ja:?}");
    }
}

#[test]
fn fuzz_eval_alternance_cassee() {
    let mut rng = Rng::new(99);

    for _ in 0..1000 {
        let mut jetons = gen_expression(&mut rng, 4);
        // casse l’alternance : soit opérateur final, soit nombre doublé
        if rng.pick(2) == 0 {
            jetons.push(Jeton::Operateur(OPS[rng.pick(4) as usize]));
        } else {
            let i = (rng.pick(jetons.len() as u32 / 2 + 1) * 2) as usize;
            jetons.insert(i, Jeton::Nombre("1".into()));
        }

        match evaluer(&jetons) {
            Err(ErreurCalcul::ExpressionInvalide) => {}
            autre => panic!("attendu ExpressionInvalide, obtenu {autre:?} pour {jetons:?}"),
        }
    }
}

/* ------------------------ Constructeur ------------------------ */

fn check_invariants(etat: &EtatCalc) {
    let j = &etat.jetons;

    if let Some(premier) = j.first() {
        assert!(!premier.est_operateur(), "opérateur en tête: {j:?}");
    }
    for (i, jeton) in j.iter().enumerate() {
        assert_eq!(jeton.est_operateur(), i % 2 == 1, "alternance cassée: {j:?}");
    }
    if !etat.resultat_affiche {
        // le nombre en cours attend dans `entree`
        if let Some(dernier) = j.last() {
            assert!(dernier.est_operateur(), "nombre final validé: {j:?}");
        }
        assert!(
            etat.entree.matches('.').count() <= 1,
            "deux points: {:?}",
            etat.entree
        );
    } else {
        assert!(j.is_empty(), "jetons après résultat: {j:?}");
    }
    assert!(etat.historique.len() <= CAPACITE_HISTORIQUE);
}

#[test]
fn fuzz_constructeur_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_secs(3);
    let mut rng = Rng::new(0x5EED);
    let mut etat = EtatCalc::new();

    for _ in 0..20_000 {
        budget(t0, max);

        match rng.pick(20) {
            0..=9 => etat.ajouter_chiffre(char::from(b'0' + rng.pick(10) as u8)),
            10 => etat.ajouter_chiffre('.'),
            11..=14 => etat.ajouter_operateur(OPS[rng.pick(4) as usize]),
            15 | 16 => etat.backspace(),
            17 => etat.calculer(),
            18 => etat.clear(),
            _ => {
                if rng.pick(10) == 0 {
                    etat.clear_all();
                } else {
                    etat.calculer();
                }
            }
        }

        check_invariants(&etat);
    }
}
