//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - jetons.rs     : Jeton (nombre texte | opérateur) + rendu texte
//! - erreur.rs     : erreurs typées de l’évaluateur
//! - eval.rs       : évaluation deux niveaux (* / puis + -)
//! - format.rs     : affichage du résultat (décimal ou scientifique)
//! - historique.rs : 10 derniers calculs (FIFO)
//! - etat.rs       : état + constructeur d’expression + "="

pub mod erreur;
pub mod etat;
pub mod eval;
pub mod format;
pub mod historique;
pub mod jetons;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale (UI)
pub use etat::EtatCalc;
pub use jetons::Operateur;
