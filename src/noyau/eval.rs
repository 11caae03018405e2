//! Noyau — évaluation d’une suite de jetons terminée.
//!
//! Deux niveaux de précédence seulement, réduits de gauche à droite :
//! 1) on replie chaque `*` / `/` dans l’ordre de rencontre ;
//! 2) on replie les `+` / `-` restants à partir du premier terme.
//!
//! Fonction pure : aucun effet de bord, aucune allocation persistante.

use super::erreur::ErreurCalcul;
use super::jetons::{Jeton, Operateur};

/// API publique : évalue `n0 op1 n1 op2 n2 …`.
///
/// L’appelant a déjà poussé l’entrée en cours comme dernier jeton.
pub fn evaluer(jetons: &[Jeton]) -> Result<f64, ErreurCalcul> {
    // 1) Classement + lecture des nombres (NombreInvalide passe avant tout le reste)
    let mut nombres: Vec<f64> = Vec::with_capacity(jetons.len() / 2 + 1);
    let mut ops: Vec<Operateur> = Vec::with_capacity(jetons.len() / 2);

    for j in jetons {
        match j {
            Jeton::Nombre(txt) => nombres.push(lire_nombre(txt)?),
            Jeton::Operateur(op) => ops.push(*op),
        }
    }

    // 2) Identité : un seul nombre, aucun opérateur
    if let ([n], []) = (nombres.as_slice(), ops.as_slice()) {
        return Ok(*n);
    }

    // 3) Forme n (op n)* obligatoire
    if nombres.len() != ops.len() + 1 || !alternance_valide(jetons) {
        return Err(ErreurCalcul::ExpressionInvalide);
    }

    let (premier, reste) = nombres
        .split_first()
        .ok_or(ErreurCalcul::ExpressionInvalide)?;

    // 4) Passe multiplicative : chaque terme additif est replié sur place
    let mut termes: Vec<(Operateur, f64)> = Vec::with_capacity(nombres.len());
    let mut signe = Operateur::Plus;
    let mut courant = *premier;

    for (&op, &n) in ops.iter().zip(reste) {
        match op {
            Operateur::Fois => courant *= n,
            Operateur::Divise => {
                if n == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                courant /= n;
            }
            Operateur::Plus | Operateur::Moins => {
                termes.push((signe, courant));
                signe = op;
                courant = n;
            }
        }
    }
    termes.push((signe, courant));

    // 5) Passe additive, à partir du premier terme restant
    let (&(_, depart), suite) = termes
        .split_first()
        .ok_or(ErreurCalcul::ExpressionInvalide)?;

    Ok(suite.iter().fold(depart, |acc, &(op, v)| match op {
        Operateur::Moins => acc - v,
        _ => acc + v,
    }))
}

fn lire_nombre(txt: &str) -> Result<f64, ErreurCalcul> {
    txt.trim()
        .parse::<f64>()
        .map_err(|_| ErreurCalcul::NombreInvalide(txt.to_string()))
}

/// Positions paires = nombres, impaires = opérateurs.
fn alternance_valide(jetons: &[Jeton]) -> bool {
    jetons
        .iter()
        .enumerate()
        .all(|(i, j)| j.est_operateur() == (i % 2 == 1))
}
