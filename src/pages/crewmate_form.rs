use serde::{Deserialize, Serialize};

use super::layout::escape;
use crate::entities::{Category, CrewmateDraft, DraftError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormIntent {
    /// Re-render with the picks applied.
    Apply,
    #[default]
    Save,
}

/// Posted creation/edit form.
///
/// `previous_category`, `draft_speed` and `draft_color` echo the state the form
/// was rendered with; `category`, `speed` and `color` are the user's picks.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrewmateFormData {
    pub name: String,
    pub category: String,
    pub previous_category: String,
    pub draft_speed: i32,
    pub draft_color: String,
    pub speed: Option<i32>,
    pub color: Option<String>,
    #[serde(default)]
    pub intent: FormIntent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// The echoed state started from a default draft, so it must already fit its
    /// category.
    Create,
    /// The echoed state may carry a stored record that breaks its category.
    Edit,
}

/// What the handler should do after folding a post into a draft.
#[derive(Debug)]
pub enum FormOutcome {
    Render(CrewmateDraft),
    Rejected(CrewmateDraft, DraftError),
    Submit(CrewmateDraft),
}

impl CrewmateFormData {
    /// A category change is an interaction of its own: the draft is clamped to the
    /// new category and shown again, any speed/color picks in the same post are
    /// dropped. Otherwise picks must be offered by the current category.
    pub fn into_outcome(self, mode: FormMode) -> FormOutcome {
        let mut draft = CrewmateDraft::restore(
            self.name,
            self.draft_speed,
            &self.draft_color,
            &self.previous_category,
        );

        if Category::resolve(&self.category) != draft.category() {
            draft.select_category_token(&self.category);
            return FormOutcome::Render(draft);
        }

        if mode == FormMode::Create && !draft.satisfies_category_constraints() {
            let category = draft.category();
            draft.select_category(category);
            return FormOutcome::Render(draft);
        }

        if let Some(speed) = self.speed {
            if let Err(err) = draft.select_speed(speed) {
                return FormOutcome::Rejected(draft, err);
            }
        }
        if let Some(color) = self.color {
            if let Err(err) = draft.select_color(&color) {
                return FormOutcome::Rejected(draft, err);
            }
        }

        match self.intent {
            FormIntent::Apply => FormOutcome::Render(draft),
            FormIntent::Save => FormOutcome::Submit(draft),
        }
    }
}

pub struct FormView<'a> {
    pub title: &'a str,
    pub action: &'a str,
    pub submit_label: &'a str,
    pub cancel_href: &'a str,
}

pub fn render_form(view: &FormView<'_>, draft: &CrewmateDraft) -> String {
    let speed = draft.speed();
    let color = draft.color();
    let category = draft.category();

    let categories = Category::ALL
        .iter()
        .map(|c| {
            format!(
                r#"<option value="{0}"{1}>{0}</option>"#,
                c.as_str(),
                if *c == category { " selected" } else { "" }
            )
        })
        .collect::<String>();

    let speeds = draft
        .speed_options()
        .into_iter()
        .map(|s| {
            format!(
                r#"<label><input type="radio" name="speed" value="{0}"{1}> {0}</label>"#,
                s,
                if s == speed { " checked" } else { "" }
            )
        })
        .collect::<String>();

    let colors = draft
        .color_options()
        .iter()
        .map(|c| {
            format!(
                r#"<label title="{0}"><input type="radio" name="color" value="{0}"{1}> <span class="dot" style="background:{2}"></span></label>"#,
                c.as_str(),
                if *c == color { " checked" } else { "" },
                c.swatch().css()
            )
        })
        .collect::<String>();

    format!(
        r#"<section class="card">
<h1>{title}</h1>
<div><span class="suit" style="background:{swatch}"></span> <span class="badge" style="background:#4f46e5">{speed}</span></div>
<form method="post" action="{action}">
<input type="hidden" name="previous_category" value="{category}">
<input type="hidden" name="draft_speed" value="{speed}">
<input type="hidden" name="draft_color" value="{color}">
<p><label for="name">Crewmate Name</label><br>
<input id="name" name="name" placeholder="Enter crewmate name..." value="{name}" required></p>
<p><label for="category">Category</label><br>
<select id="category" name="category" onchange="this.form.submit()">{categories}</select></p>
<p>Speed: {speed} ({speed_label})<br>{speeds}</p>
<p>Color: {color}<br>{colors}</p>
<p><button type="submit" name="intent" value="save">{submit}</button>
<button type="submit" name="intent" value="apply" formnovalidate>Apply category</button>
<a href="{cancel}">Cancel</a></p>
</form>
</section>"#,
        title = escape(view.title),
        swatch = color.swatch().css(),
        action = escape(view.action),
        category = escape(category.as_str()),
        speed = speed,
        color = color,
        name = escape(draft.name()),
        categories = categories,
        speed_label = speed.label(),
        speeds = speeds,
        colors = colors,
        cancel = escape(view.cancel_href),
        submit = escape(view.submit_label),
    )
}
