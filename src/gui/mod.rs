use crate::gui::state::PendingRemoval;
use crate::models::activity::Activity;
use crate::models::feedback::Severity;
use crate::APP_STATE;
use std::time::{Duration, Instant};

pub mod state;

const FETCH_FAILURE_NOTICE: &str = "Failed to load activities. Please try again later.";
const LOADING_NOTICE: &str = "Loading activities...";
const NO_PARTICIPANTS_PLACEHOLDER: &str = "No participants yet - be the first!";
const SELECT_PROMPT: &str = "-- Select an activity --";

const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(0x40, 0xa0, 0x2b);
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(0xd2, 0x0f, 0x39);

fn participants_heading(activity: &Activity) -> String {
    if activity.participants.is_empty() {
        "Currently signed up:".to_owned()
    } else {
        format!("Currently signed up ({}):", activity.participants.len())
    }
}

pub fn ui_main(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());

    let mut state = APP_STATE.lock().unwrap();

    // The dismiss deadline and the background workers both need a frame to
    // land in; keep repainting around them.
    let now = Instant::now();
    state.feedback.tick(now);
    if let Some(at) = state.feedback.dismiss_at() {
        ctx.request_repaint_after(at.saturating_duration_since(now));
    }
    ctx.request_repaint_after(Duration::from_millis(200));

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        egui::Frame::default()
            .outer_margin(egui::vec2(0.0, 4.0))
            .show(ui, |ui| {
                ui.heading("Extracurricular Activities");
            });
    });

    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if state.feedback.visible() {
                let color = match state.feedback.severity() {
                    Severity::Success => SUCCESS_COLOR,
                    Severity::Error => ERROR_COLOR,
                };
                ui.colored_label(color, state.feedback.text());
            }
        });
    });

    let mut requested: Option<PendingRemoval> = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Upcoming Activities");
                ui.add_space(8.0);

                if state.catalog_failed {
                    ui.label(FETCH_FAILURE_NOTICE);
                } else if !state.catalog_loaded {
                    ui.label(LOADING_NOTICE);
                } else {
                    for (name, activity) in &state.catalog {
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.strong(name);
                            ui.label(&activity.description);
                            ui.label(format!("Schedule: {}", activity.schedule));
                            ui.label(format!(
                                "Availability: {} spots left",
                                activity.spots_left()
                            ));
                            ui.label(participants_heading(activity));
                            if activity.participants.is_empty() {
                                ui.weak(NO_PARTICIPANTS_PLACEHOLDER);
                            } else {
                                for email in &activity.participants {
                                    ui.horizontal(|ui| {
                                        ui.label(email);
                                        let remove = ui
                                            .small_button("\u{2715}")
                                            .on_hover_text("Remove participant");
                                        if remove.clicked() {
                                            requested = Some(PendingRemoval {
                                                activity: name.clone(),
                                                email: email.clone(),
                                            });
                                        }
                                    });
                                }
                            }
                        });
                        ui.add_space(8.0);
                    }
                }

                ui.separator();
                ui.heading("Sign Up for an Activity");
                ui.add_space(8.0);

                let names: Vec<String> = state.catalog.keys().cloned().collect();
                let selected_label = state
                    .selected_activity
                    .clone()
                    .unwrap_or_else(|| SELECT_PROMPT.to_owned());

                egui::Grid::new("signup_grid").num_columns(2).show(ui, |ui| {
                    ui.label("Email:");
                    ui.text_edit_singleline(&mut state.email_input);
                    ui.end_row();

                    ui.label("Activity:");
                    egui::ComboBox::from_id_salt("activity_select")
                        .selected_text(selected_label)
                        .show_ui(ui, |ui| {
                            for name in &names {
                                ui.selectable_value(
                                    &mut state.selected_activity,
                                    Some(name.clone()),
                                    name,
                                );
                            }
                        });
                    ui.end_row();
                });

                ui.add_space(8.0);
                let ready = !state.email_input.trim().is_empty()
                    && state.selected_activity.is_some();
                if ui.add_enabled(ready, egui::Button::new("Sign Up")).clicked() {
                    state.submit_signup();
                }
            });
    });

    if let Some(pending) = requested {
        state.request_removal(pending.activity, pending.email);
    }

    // Destructive removals are gated behind an explicit yes/no.
    let mut decision: Option<bool> = None;
    if let Some(pending) = &state.pending_removal {
        egui::Window::new("Confirm removal")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(pending.prompt());
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Remove").clicked() {
                        decision = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        decision = Some(false);
                    }
                });
            });
    }
    match decision {
        Some(true) => state.confirm_removal(),
        Some(false) => state.cancel_removal(),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(participants: &[&str]) -> Activity {
        Activity {
            description: "d".to_owned(),
            schedule: "Mon".to_owned(),
            max_participants: 10,
            participants: participants.iter().map(|p| (*p).to_owned()).collect(),
        }
    }

    #[test]
    fn heading_carries_a_count_only_when_someone_signed_up() {
        assert_eq!(participants_heading(&activity(&[])), "Currently signed up:");
        assert_eq!(
            participants_heading(&activity(&["a@x.com", "b@x.com"])),
            "Currently signed up (2):"
        );
    }
}
