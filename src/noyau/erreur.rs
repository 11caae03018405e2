//! Erreurs de l’évaluateur.
//!
//! Le message (`Display`) est exactement ce qui s’affiche à la place du résultat.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Un jeton nombre ne se lit pas comme un flottant ("." seul, message d’erreur réutilisé…).
    #[error("Nombre invalide : {0}")]
    NombreInvalide(String),

    /// Alternance nombre/opérateur cassée (opérateur final, deux nombres collés…).
    #[error("Expression invalide")]
    ExpressionInvalide,

    #[error("Division par zéro")]
    DivisionParZero,
}
