use crate::domain::{
    panel::{Panel, PanelView},
    recipient::CompanyGroup,
    shell_state::ShellState,
};

const GROUP_INDENT: &str = "  ";
const MEMBER_INDENT: &str = "      ";

/// Renders both panels, available first.
pub fn render(state: &ShellState) -> Vec<String> {
    let mut lines = render_panel(&state.panel_view(Panel::Available));
    lines.push(String::new());
    lines.extend(render_panel(&state.panel_view(Panel::Selected)));
    lines
}

pub fn render_panel(view: &PanelView) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({})",
        view.panel.title(),
        view.recipient_count()
    )];

    if view.is_empty() {
        lines.push(format!("{GROUP_INDENT}{}", view.panel.empty_text()));
        return lines;
    }

    for (index, group) in view.groups.iter().enumerate() {
        lines.push(group_header(index, group));
        if group.is_expanded {
            lines.extend(
                group
                    .emails
                    .iter()
                    .map(|recipient| format!("{MEMBER_INDENT}{}", recipient.email)),
            );
        }
    }

    lines
}

fn group_header(index: usize, group: &CompanyGroup) -> String {
    let marker = if group.is_expanded { '-' } else { '+' };
    let noun = if group.len() == 1 { "email" } else { "emails" };

    format!(
        "{GROUP_INDENT}{index} [{marker}] {} ({} {noun})",
        group.domain,
        group.len()
    )
}
