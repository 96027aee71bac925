use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    FlashCardView, MapQuizView, QuestionCard, ResultsView, SettingsView, TitleBar,
};
use crate::tui::theme::Palette;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let palette = Palette::for_theme(app.theme);
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(
        app.settings.subject,
        app.running_score(),
        &app.status_message,
        palette,
    )
    .render(frame, title_area);

    match app.screen {
        Screen::Settings => {
            SettingsView::new(&mut tui.settings, &app.settings, palette).render(frame, main_area)
        }
        Screen::Quiz => {
            if let Some(session) = app.session.as_ref() {
                QuestionCard::new(&mut tui.question_card, session, palette).render(frame, main_area);
            }
        }
        Screen::FlashCards => {
            if let Some(session) = app.session.as_ref() {
                FlashCardView::new(session, &app.countdown, palette).render(frame, main_area);
            }
        }
        Screen::CapitalMap => {
            if let Some(map) = app.map_quiz.as_ref() {
                MapQuizView::new(&mut tui.map_input, map, palette).render(frame, main_area);
            }
        }
        Screen::Results => {
            if let Some(results) = app.results.as_ref() {
                ResultsView::new(results, palette).render(frame, main_area);
            }
        }
        Screen::Unavailable => draw_unavailable(frame, main_area, app, palette),
    }

    frame.render_widget(
        Line::from(Span::styled(help_text(app.screen), palette.dim())),
        help_area,
    );
}

fn help_text(screen: Screen) -> &'static str {
    match screen {
        Screen::Settings => "Ctrl+T Theme  Ctrl+C Quit",
        Screen::Quiz => "1-9 Pick  r Restart  Esc Settings  Ctrl+T Theme",
        Screen::FlashCards => "c Correct  w Wrong  Enter Next  Esc Settings",
        Screen::CapitalMap => "Names or codes (KA, IN-KA) both work  Esc Settings",
        Screen::Results | Screen::Unavailable => "Esc Settings  q Quit",
    }
}

fn draw_unavailable(frame: &mut Frame, area: Rect, app: &App, palette: Palette) {
    let text = vec![
        Line::from(Span::styled(
            format!(
                "Cannot build a {} {} from the loaded vocabulary.",
                app.settings.subject.label(),
                app.settings.activity.label()
            ),
            palette.verdict(false),
        )),
        Line::default(),
        Line::from("Check the data files in your config, or pick another subject."),
    ];
    let paragraph = Paragraph::new(text)
        .block(
            Block::bordered()
                .title(" Unavailable ")
                .border_style(palette.dim()),
        )
        .style(palette.base())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use crate::{Activity, Subject};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_settings() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Kalike | Kannada"));
        assert!(text.contains("Welcome to Kalike!"));
        assert!(text.contains("Settings"));
    }

    #[test]
    fn test_draw_every_screen() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::SelectSubject(Subject::Hindi));
        update(&mut app, Action::StartQuiz);
        assert_eq!(app.screen, Screen::Quiz);
        assert!(draw(&app, &mut tui).contains("Score 0/"));

        update(&mut app, Action::SelectSubject(Subject::Kannada));
        update(&mut app, Action::SelectActivity(Activity::FlashCards));
        update(&mut app, Action::StartQuiz);
        assert_eq!(app.screen, Screen::FlashCards);
        assert!(draw(&app, &mut tui).contains("Card 1 of 10"));

        update(&mut app, Action::SelectSubject(Subject::Geography));
        update(&mut app, Action::SelectActivity(Activity::CapitalMap));
        update(&mut app, Action::StartQuiz);
        assert_eq!(app.screen, Screen::CapitalMap);
        assert!(draw(&app, &mut tui).contains("Round 1 of 10"));
    }

    #[test]
    fn test_draw_unavailable() {
        let mut app = test_app();
        app.screen = Screen::Unavailable;
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Cannot build a Kannada Quiz"));
    }
}
