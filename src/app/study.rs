//! Study window: flashcard on top, timed quiz below.

use eframe::egui;

use neuro_mapper::interaction::Action;
use neuro_mapper::study::quiz::Feedback;

use super::MapperApp;
use crate::ui::render_bullets;

/// Button presses collected while the window borrows the session.
enum StudyCommand {
    Reveal,
    Answer(&'static str),
    Next,
    Restart,
}

impl MapperApp {
    pub fn draw_study(&mut self, ctx: &egui::Context) {
        let Some(session) = self.mapper.study().session() else {
            return;
        };

        let mut open = true;
        let mut command = None;

        egui::Window::new("Study mode")
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .default_width(440.0)
            .show(ctx, |ui| {
                // Flashcard
                let card = &session.flashcard;
                ui.heading(&card.label);
                ui.label(card.prompt);
                if card.revealed {
                    render_bullets(ui, &card.back);
                }
                let caption = if card.revealed { "Hide" } else { "Reveal" };
                if ui.button(caption).clicked() {
                    command = Some(StudyCommand::Reveal);
                }

                ui.separator();

                // Quiz
                let quiz = &session.quiz;
                ui.horizontal(|ui| {
                    ui.strong("Quiz");
                    if !quiz.questions().is_empty() {
                        ui.label(format!("{}/{}", quiz.index() + 1, quiz.questions().len()));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(session.countdown.display());
                    });
                });

                match quiz.current() {
                    Some(q) => {
                        ui.label(&q.stem);
                        ui.add_space(4.0);
                        for choice in &q.choices {
                            if ui.button(*choice).clicked() {
                                command = Some(StudyCommand::Answer(*choice));
                            }
                        }
                    }
                    None => {
                        ui.label(egui::RichText::new("No questions available.").weak());
                    }
                }

                if let Some(fb) = quiz.feedback() {
                    let color = match fb {
                        Feedback::Correct => egui::Color32::from_rgb(90, 200, 120),
                        Feedback::Incorrect { .. } => egui::Color32::from_rgb(235, 100, 100),
                        Feedback::TimeUp => egui::Color32::from_rgb(240, 190, 80),
                    };
                    ui.add_space(4.0);
                    ui.colored_label(color, fb.to_string());
                }

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("Next").clicked() {
                        command = Some(StudyCommand::Next);
                    }
                    if ui.button("Restart").clicked() {
                        command = Some(StudyCommand::Restart);
                    }
                });
            });

        match command {
            Some(StudyCommand::Reveal) => self.mapper.reveal_flashcard(),
            Some(StudyCommand::Answer(choice)) => self.mapper.answer(choice),
            Some(StudyCommand::Next) => self.mapper.next_question(),
            Some(StudyCommand::Restart) => self.mapper.restart_quiz(),
            None => {}
        }
        if !open {
            self.apply(Action::ToggleStudy);
        }
    }
}
