use std::io::BufRead;

use anyhow::Result;

use crate::{
    domain::{
        events::{AppEvent, GroupRef, RecipientTarget},
        panel::Panel,
    },
    usecases::contracts::AppEventSource,
};

/// Reads one shell command per line. End of input quits.
///
/// A line that is not valid UTF-8 becomes an unknown command instead of
/// ending the session.
pub struct LineEventSource<R> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> LineEventSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
        }
    }
}

impl<R: BufRead> AppEventSource for LineEventSource<R> {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(Some(AppEvent::QuitRequested));
        }

        match std::str::from_utf8(&self.line) {
            Ok(line) => Ok(parse_command(line)),
            Err(_) => {
                let lossy = String::from_utf8_lossy(&self.line);
                tracing::debug!(bytes = self.line.len(), "non UTF-8 input line");
                Ok(Some(AppEvent::UnknownCommand(lossy.trim().to_owned())))
            }
        }
    }
}

/// Maps a command line to an event. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let event = match (command, rest) {
        ("quit" | "q" | "exit", _) => AppEvent::QuitRequested,
        ("list" | "ls", _) => AppEvent::Redraw,
        ("add", text) => AppEvent::SubmitEmail(text.to_owned()),
        ("pick", value) if !value.is_empty() => AppEvent::ChooseSuggestion(value.to_owned()),
        ("suggest", query) => AppEvent::Suggest(query.to_owned()),
        ("select", target) if !target.is_empty() => {
            AppEvent::Select(RecipientTarget::parse(target))
        }
        ("deselect" | "remove", target) if !target.is_empty() => {
            AppEvent::Deselect(RecipientTarget::parse(target))
        }
        ("toggle", args) => match parse_toggle(args) {
            Some(event) => event,
            None => AppEvent::UnknownCommand(line.to_owned()),
        },
        _ => AppEvent::UnknownCommand(line.to_owned()),
    };

    Some(event)
}

fn parse_toggle(args: &str) -> Option<AppEvent> {
    let (panel, group) = args.split_once(char::is_whitespace)?;
    let group = group.trim();
    if group.is_empty() {
        return None;
    }

    Some(AppEvent::ToggleGroup {
        panel: Panel::parse(panel)?,
        group: GroupRef::parse(group),
    })
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(Some(
            self.queue.pop_front().unwrap_or(AppEvent::QuitRequested),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_submission_with_inner_text() {
        assert_eq!(
            parse_command("add  newuser@domain.com \n"),
            Some(AppEvent::SubmitEmail("newuser@domain.com".to_owned()))
        );
        assert_eq!(
            parse_command("add"),
            Some(AppEvent::SubmitEmail(String::new()))
        );
    }

    #[test]
    fn parses_selection_targets() {
        assert_eq!(
            parse_command("select @example.com"),
            Some(AppEvent::Select(RecipientTarget::Domain(
                "example.com".to_owned()
            )))
        );
        assert_eq!(
            parse_command("remove kate@qwerty.com"),
            Some(AppEvent::Deselect(RecipientTarget::Email(
                "kate@qwerty.com".to_owned()
            )))
        );
    }

    #[test]
    fn parses_toggle_by_index_and_domain() {
        assert_eq!(
            parse_command("toggle available 0"),
            Some(AppEvent::ToggleGroup {
                panel: Panel::Available,
                group: GroupRef::Index(0),
            })
        );
        assert_eq!(
            parse_command("toggle s qwerty.com"),
            Some(AppEvent::ToggleGroup {
                panel: Panel::Selected,
                group: GroupRef::Domain("qwerty.com".to_owned()),
            })
        );
    }

    #[test]
    fn malformed_commands_are_reported_as_unknown() {
        for line in ["toggle", "toggle sideways 1", "select", "pick", "frobnicate x"] {
            assert_eq!(
                parse_command(line),
                Some(AppEvent::UnknownCommand(line.to_owned())),
                "{line:?}"
            );
        }
    }

    #[test]
    fn blank_line_yields_no_event() {
        assert_eq!(parse_command("   \n"), None);
    }

    #[test]
    fn line_source_reads_until_end_of_input() {
        let input = "add a@b.com\n\nquit\n";
        let mut source = LineEventSource::new(input.as_bytes());

        assert_eq!(
            source.next_event().expect("read"),
            Some(AppEvent::SubmitEmail("a@b.com".to_owned()))
        );
        assert_eq!(source.next_event().expect("read"), None);
        assert_eq!(source.next_event().expect("read"), Some(AppEvent::QuitRequested));
        assert_eq!(source.next_event().expect("read"), Some(AppEvent::QuitRequested));
    }

    #[test]
    fn invalid_utf8_line_does_not_stop_reading() {
        let input: &[u8] = b"add \xff\xfe@x.com\nadd ok@x.com\n";
        let mut source = LineEventSource::new(input);

        assert!(matches!(
            source.next_event().expect("read"),
            Some(AppEvent::UnknownCommand(line)) if line.starts_with("add ")
        ));
        assert_eq!(
            source.next_event().expect("read"),
            Some(AppEvent::SubmitEmail("ok@x.com".to_owned()))
        );
        assert_eq!(source.next_event().expect("read"), Some(AppEvent::QuitRequested));
    }
}
