//! Sign-in form.

use crate::app::Forms;
use crate::constants::spacing;
use crate::message::{Message, SessionMessage};

use super::helpers;

pub fn view(ui: &mut egui::Ui, forms: &mut Forms, messages: &mut Vec<Message>) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        helpers::heading(ui, "Sign in to VisionDesk");
        ui.set_max_width(320.0);

        ui.label("Email");
        ui.text_edit_singleline(&mut forms.login_email);
        ui.add_space(spacing::TIGHT);

        ui.label("Password");
        let password = ui.add(
            egui::TextEdit::singleline(&mut forms.login_password).password(true),
        );
        ui.add_space(spacing::STANDARD);

        let submitted_with_enter =
            password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Sign In").clicked() || submitted_with_enter {
            messages.push(Message::Session(SessionMessage::LoginSubmitted {
                email: forms.login_email.clone(),
                password: forms.login_password.clone(),
            }));
        }
    });
}
