// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Deux champs d’opérandes (A, B) ; B sert de base pour log (vide => base 10)
// - Un bouton par opération du noyau
// - Enter dans un champ : répète la dernière opération

use eframe::egui;
use tracing::debug;

use calculatrice_sci::noyau::format::DIGITS_MAX;
use calculatrice_sci::noyau::{formater_resultat, Arite, Calculatrice, Operation};

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_entrees(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_operations(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);
            });
    }

    fn ui_entrees(&mut self, ui: &mut egui::Ui) {
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.label("A :");
        let resp_a = ui.add(
            egui::TextEdit::singleline(&mut self.operande_a)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2, -3.5, 1e-3, 1,5")
                .id_salt("operande_a")
                .code_editor(),
        );
        if self.focus_a {
            resp_a.request_focus();
            self.focus_a = false;
        }

        ui.label("B (ou base du log) :");
        let resp_b = ui.add(
            egui::TextEdit::singleline(&mut self.operande_b)
                .desired_width(ui.available_width())
                .hint_text("vide => base 10 pour log")
                .id_salt("operande_b")
                .code_editor(),
        );

        if enter && (resp_a.has_focus() || resp_b.has_focus()) {
            if let Some(op) = self.derniere {
                self.eval_via_noyau(op);
            }
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrées seulement ; CLR = résultat seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface les opérandes", Action::ClearEntrees);
            self.bouton_action(ui, "CLR", "Efface résultat + erreur", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "ANS", "Résultat → A", Action::Reprendre);

            ui.separator();

            ui.label("Chiffres :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DIGITS_MAX as u32),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });
    }

    fn ui_operations(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("operations_sci")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, &op) in Operation::toutes().iter().enumerate() {
                    let resp = ui
                        .add_sized([72.0, 30.0], egui::Button::new(op.symbole()))
                        .on_hover_text(op.nom());
                    if resp.clicked() {
                        self.eval_via_noyau(op);
                    }
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        let titre = match self.derniere {
            Some(op) => format!("Résultat ({op}) :"),
            None => "Résultat :".to_string(),
        };
        ui.label(titre);

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(&self.resultat);
            });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntrees => self.clear_entrees(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Reprendre => self.reprendre_resultat(),
            }
        }
    }

    /// Lit les opérandes, évalue via le noyau, dépose résultat ou erreur dans l’état UI.
    fn eval_via_noyau(&mut self, op: Operation) {
        let operandes = match operandes_pour(op, &self.operande_a, &self.operande_b) {
            Ok(v) => v,
            Err(msg) => {
                self.set_erreur(msg);
                return;
            }
        };

        let r = Calculatrice::<f64>::new().evaluer(op, &operandes);
        let txt = formater_resultat(&r, self.digits);
        match r {
            Ok(_) => self.set_resultat(op, txt),
            Err(e) => {
                debug!(%op, erreur = %e, "évaluation refusée");
                self.set_erreur(txt);
            }
        }
    }
}

/// Opérandes à passer au noyau selon l’arité de `op`.
fn operandes_pour(op: Operation, a: &str, b: &str) -> Result<Vec<f64>, String> {
    let x = lire_operande(a).map_err(|e| format!("A : {e}"))?;

    match op.arite() {
        Arite::Unaire => Ok(vec![x]),
        Arite::Binaire => {
            let y = lire_operande(b).map_err(|e| format!("B : {e}"))?;
            Ok(vec![x, y])
        }
        Arite::UnOuDeux => {
            if b.trim().is_empty() {
                Ok(vec![x])
            } else {
                let y = lire_operande(b).map_err(|e| format!("base : {e}"))?;
                Ok(vec![x, y])
            }
        }
    }
}

/// Nombre littéral seulement (pas d’expression). Virgule décimale acceptée,
/// mais une seule et jamais avec un point (« 1,000,000 » ou « 1.000,5 » sont refusés).
fn lire_operande(s: &str) -> Result<f64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("entrée vide".into());
    }
    let virgules = s.matches(',').count();
    if virgules > 1 || (virgules == 1 && s.contains('.')) {
        return Err(format!("séparateur décimal ambigu {s:?}"));
    }
    s.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| format!("nombre invalide {s:?}"))
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntrees,
    ClearResultats,
    ResetTotal,
    Reprendre,
}
