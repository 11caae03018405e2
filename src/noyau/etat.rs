//! src/noyau/etat.rs
//!
//! État de la calculatrice + constructeur d’expression.
//!
//! Rôle : traduire chaque intention utilisateur (chiffre, opérateur, DEL, C, AC, =)
//! en mutation de `entree` / `jetons`, en garantissant que l’évaluateur ne voit
//! jamais une suite syntaxiquement fausse par construction.
//!
//! Contrats :
//! - `jetons` ne commence jamais par un opérateur et ne contient jamais deux
//!   opérateurs adjacents ; non vide, il se termine toujours par un opérateur
//!   (le dernier nombre attend dans `entree`).
//! - Une édition refusée (second point, opérateur en tête) est un no-op silencieux.
//! - Aucune action ne laisse l’état inutilisable, même après une erreur.
//!
//! Pas de vue ici : l’adaptateur relit les champs publics après chaque action.

use tracing::{debug, info, trace, warn};

use super::eval::evaluer;
use super::format::formater_resultat;
use super::historique::Historique;
use super::jetons::{format_jetons, Jeton, Operateur};

#[derive(Clone, Debug, Default)]
pub struct EtatCalc {
    // --- nombre en cours de saisie (ou résultat / message après "=") ---
    pub entree: String,

    // --- suite nombre, op, nombre, op… déjà validée ---
    pub jetons: Vec<Jeton>,

    // --- vrai juste après "=" (résultat OU erreur), jusqu’à la prochaine édition ---
    pub resultat_affiche: bool,

    pub historique: Historique,
}

impl EtatCalc {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Constructeur d’expression ------------------------ */

    /// Chiffre `0-9` ou point décimal.
    ///
    /// Après un résultat, on repart d’une expression vierge (le résultat est jeté).
    pub fn ajouter_chiffre(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            trace!(?c, "caractère refusé");
            return;
        }

        if self.resultat_affiche {
            self.reset_expression();
        }

        if c == '.' && self.entree.contains('.') {
            trace!("second point décimal refusé");
            return;
        }

        self.entree.push(c);
    }

    /// Opérateur binaire.
    ///
    /// Après un résultat, ce résultat devient l’opérande gauche.
    pub fn ajouter_operateur(&mut self, op: Operateur) {
        if self.resultat_affiche {
            self.resultat_affiche = false;
            self.jetons.clear();
            self.jetons.push(Jeton::Nombre(std::mem::take(&mut self.entree)));
            self.jetons.push(Jeton::Operateur(op));
            return;
        }

        if self.entree.is_empty() {
            match self.jetons.last().map(Jeton::est_operateur) {
                // Pas d’opérateur en tête (pas de moins unaire).
                None => trace!(%op, "opérateur en tête refusé"),
                // Deux opérateurs de suite : le dernier gagne.
                Some(true) => {
                    self.jetons.pop();
                    self.jetons.push(Jeton::Operateur(op));
                }
                Some(false) => self.jetons.push(Jeton::Operateur(op)),
            }
            return;
        }

        self.jetons.push(Jeton::Nombre(std::mem::take(&mut self.entree)));
        self.jetons.push(Jeton::Operateur(op));
    }

    /// DEL : retire le dernier caractère, ou “rouvre” le dernier nombre validé.
    pub fn backspace(&mut self) {
        if self.resultat_affiche {
            self.reset_expression();
            return;
        }

        if self.entree.pop().is_some() {
            return;
        }

        // entrée vide : on jette l’opérateur final et on rend le nombre à l’édition
        if matches!(self.jetons.last(), Some(Jeton::Operateur(_))) {
            self.jetons.pop();
        }
        if matches!(self.jetons.last(), Some(Jeton::Nombre(_))) {
            if let Some(Jeton::Nombre(txt)) = self.jetons.pop() {
                self.entree = txt;
            }
        }
    }

    /// C : expression effacée, historique conservé.
    pub fn clear(&mut self) {
        self.reset_expression();
    }

    /// AC : expression + historique.
    pub fn clear_all(&mut self) {
        self.reset_expression();
        self.historique.vider();
        info!("historique vidé");
    }

    /* ------------------------ Dépôt du calcul ------------------------ */

    pub fn commit_resultat(&mut self, resultat: impl Into<String>) {
        self.entree = resultat.into();
        self.jetons.clear();
        self.resultat_affiche = true;
    }

    /// Une erreur s’affiche exactement comme un résultat.
    pub fn commit_erreur(&mut self, message: impl Into<String>) {
        self.commit_resultat(message);
    }

    /// "=" : évalue l’expression complète, formate, dépose, historise.
    ///
    /// - rien à calculer, ou résultat déjà affiché : no-op
    /// - échec : le message devient le “résultat”, pas d’entrée d’historique
    pub fn calculer(&mut self) {
        if self.resultat_affiche || (self.entree.is_empty() && self.jetons.is_empty()) {
            return;
        }

        let mut complets = self.jetons.clone();
        if !self.entree.is_empty() {
            complets.push(Jeton::Nombre(self.entree.clone()));
        }
        let expression = format_jetons(&complets);

        match evaluer(&complets) {
            Ok(valeur) => {
                let texte = formater_resultat(valeur);
                debug!(%expression, resultat = %texte, "calcul");
                self.historique.ajouter(expression, texte.clone());
                self.commit_resultat(texte);
            }
            Err(e) => {
                warn!(%expression, erreur = %e, "calcul impossible");
                self.commit_erreur(e.to_string());
            }
        }
    }

    /* ------------------------ Lecture (adaptateur) ------------------------ */

    /// Ligne d’expression : jetons validés + nombre en cours.
    pub fn ligne_expression(&self) -> String {
        let mut txt = format_jetons(&self.jetons);
        if !self.resultat_affiche && !self.entree.is_empty() {
            if !txt.is_empty() {
                txt.push(' ');
            }
            txt.push_str(&self.entree);
        }
        txt
    }

    fn reset_expression(&mut self) {
        self.entree.clear();
        self.jetons.clear();
        self.resultat_affiche = false;
    }
}
