// src/noyau/format.rs
//
// Affichage d’un résultat numérique.
// - forme décimale simple par défaut
// - notation scientifique (mantisse à 4 décimales) si le nombre est trop long,
//   trop grand ou trop petit pour l’écran

/// Au-delà de ce nombre de chiffres (point décimal ignoré) on passe en scientifique.
const MAX_CHIFFRES_PLAIN: usize = 10;

/// |x| > SEUIL_GRAND => scientifique.
const SEUIL_GRAND: f64 = 1e7;

/// 0 < |x| < SEUIL_PETIT => scientifique.
const SEUIL_PETIT: f64 = 1e-7;

const DECIMALES_SCIENTIFIQUES: usize = 4;

/// Texte affiché (et stocké dans l’historique) pour un résultat.
pub fn formater_resultat(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // -0 => "0"
    if x == 0.0 {
        return "0".to_string();
    }

    let plain = format!("{x}");
    let chiffres = plain.chars().filter(char::is_ascii_digit).count();
    let abs = x.abs();

    if chiffres > MAX_CHIFFRES_PLAIN || abs > SEUIL_GRAND || abs < SEUIL_PETIT {
        format_scientifique(x)
    } else {
        plain
    }
}

/// `{:.4e}` donne "1.2346e11" : on force le signe de l’exposant ("1.2346e+11").
fn format_scientifique(x: f64) -> String {
    let brut = format!("{x:.prec$e}", prec = DECIMALES_SCIENTIFIQUES);
    match brut.split_once('e') {
        Some((mantisse, exposant)) => match exposant.strip_prefix('-') {
            Some(abs_exp) => format!("{mantisse}e-{abs_exp}"),
            None => format!("{mantisse}e+{exposant}"),
        },
        None => brut,
    }
}
