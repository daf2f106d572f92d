use crate::view::{ActivityCard, ListContent, Page, ParticipantSection, StatusMessage};
use chrono::{DateTime, Utc};

pub const LIST_ID: &str = "activities-list";
pub const SELECT_ID: &str = "activity";
pub const FORM_ID: &str = "signup-form";
pub const EMAIL_ID: &str = "email";
pub const MESSAGE_ID: &str = "message";

pub fn render_page(page: &Page, now: DateTime<Utc>) -> String {
    INDEX_HTML
        .replace("{{LIST}}", &render_list(page.activities_list.content()))
        .replace("{{OPTIONS}}", &render_options(page))
        .replace("{{EMAIL}}", &escape_html(&page.signup_form.email))
        .replace("{{MESSAGE}}", &render_message(page.message.visible_at(now), now))
        .replace("{{ALERT}}", &render_alert(page.alert.pending()))
}

pub fn render_confirm(activity: &str, email: &str, question: &str) -> String {
    CONFIRM_HTML
        .replace("{{QUESTION}}", &escape_html(question))
        .replace("{{ACTIVITY}}", &escape_html(activity))
        .replace("{{EMAIL}}", &escape_html(email))
}

fn render_list(content: &ListContent) -> String {
    match content {
        ListContent::Loading => "<p>Loading activities...</p>".to_string(),
        ListContent::Fallback(text) => format!("<p>{}</p>", escape_html(text)),
        ListContent::Cards(cards) => cards.iter().map(render_card).collect(),
    }
}

fn render_card(card: &ActivityCard) -> String {
    let participants = match &card.participants {
        ParticipantSection::Placeholder(text) => {
            format!(r#"<p class="no-participants">{}</p>"#, escape_html(text))
        }
        ParticipantSection::Entries(entries) => {
            let items: String = entries
                .iter()
                .map(|entry| {
                    format!(
                        r#"<li><span>{email}</span><form class="remove" method="get" action="/unregister"><input type="hidden" name="activity" value="{activity}" /><input type="hidden" name="email" value="{email}" /><button type="submit" title="Unregister">&times;</button></form></li>"#,
                        email = escape_html(&entry.remove.email),
                        activity = escape_html(&entry.remove.activity),
                    )
                })
                .collect();
            format!(r#"<ul class="participants">{items}</ul>"#)
        }
    };

    format!(
        r#"<div class="activity-card"><h4>{name}</h4><p>{description}</p><p><strong>Schedule:</strong> {schedule}</p><p><strong>Capacity:</strong> <span class="capacity">{capacity}</span></p><div class="participants-section"><strong>Participants:</strong>{participants}</div></div>"#,
        name = escape_html(&card.name),
        description = escape_html(&card.description),
        schedule = escape_html(&card.schedule),
        capacity = escape_html(&card.capacity),
    )
}

fn render_options(page: &Page) -> String {
    let select = &page.signup_form.activity;
    select
        .options()
        .iter()
        .map(|option| {
            let mut attrs = String::new();
            if option.disabled {
                attrs.push_str(" disabled");
            }
            if option.value == select.selected() {
                attrs.push_str(" selected");
            }
            format!(
                r#"<option value="{}"{attrs}>{}</option>"#,
                escape_html(&option.value),
                escape_html(&option.label)
            )
        })
        .collect()
}

fn render_message(message: Option<&StatusMessage>, now: DateTime<Utc>) -> String {
    match message {
        Some(message) => format!(
            r#"<div id="{MESSAGE_ID}" class="{}" data-hide-after-ms="{}">{}</div>"#,
            message.kind.class(),
            message.remaining_at(now).num_milliseconds(),
            escape_html(&message.text)
        ),
        None => format!(r#"<div id="{MESSAGE_ID}" class="hidden"></div>"#),
    }
}

fn render_alert(alert: Option<&str>) -> String {
    let Some(text) = alert else {
        return String::new();
    };
    let literal = serde_json::to_string(text)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/");
    format!("<script>window.alert({literal});</script>")
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // Keeps user text from forming a template marker.
            '{' => out.push_str("&#123;"),
            _ => out.push(ch),
        }
    }
    out
}

const STYLE: &str = r#"
    :root {
      --ink: #1f2a37;
      --accent: #1a237e;
      --ok-bg: #e8f5e9;
      --ok-ink: #2e7d32;
      --err-bg: #ffebee;
      --err-ink: #c62828;
    }

    body {
      margin: 0;
      font-family: "Segoe UI", Arial, sans-serif;
      color: var(--ink);
      background: #f5f5f5;
    }

    header {
      background: var(--accent);
      color: white;
      padding: 18px 24px;
    }

    main {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 24px;
      padding: 24px;
    }

    section {
      background: white;
      border-radius: 8px;
      padding: 20px;
      box-shadow: 0 2px 6px rgba(0, 0, 0, 0.08);
    }

    .activity-card {
      border: 1px solid #ddd;
      border-radius: 6px;
      padding: 12px 16px;
      margin-bottom: 14px;
    }

    .participants {
      list-style: none;
      padding-left: 0;
    }

    .participants li {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .remove {
      display: inline;
    }

    .remove button {
      border: none;
      background: transparent;
      color: var(--err-ink);
      cursor: pointer;
    }

    .no-participants {
      color: #777;
      font-style: italic;
    }

    .success {
      background: var(--ok-bg);
      color: var(--ok-ink);
      padding: 10px;
      border-radius: 4px;
    }

    .error {
      background: var(--err-bg);
      color: var(--err-ink);
      padding: 10px;
      border-radius: 4px;
    }

    .hidden {
      display: none;
    }
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Activities</title>
  <link rel="stylesheet" href="/style.css" />
</head>
<body>
  <header>
    <h1>Extracurricular Activities</h1>
  </header>

  <main>
    <section>
      <h3>Available Activities</h3>
      <div id="activities-list">{{LIST}}</div>
    </section>

    <section>
      <h3>Sign Up for an Activity</h3>
      <form id="signup-form" method="post" action="/signup">
        <p>
          <label for="email">Student Email:</label>
          <input type="email" id="email" name="email" required value="{{EMAIL}}" />
        </p>
        <p>
          <label for="activity">Select Activity:</label>
          <select id="activity" name="activity" required>{{OPTIONS}}</select>
        </p>
        <button type="submit">Sign Up</button>
      </form>
      {{MESSAGE}}
    </section>
  </main>

  <script>
    const messageEl = document.getElementById('message');
    const hideAfter = Number(messageEl.dataset.hideAfterMs || 0);
    if (hideAfter > 0) {
      setTimeout(() => messageEl.classList.add('hidden'), hideAfter);
    }
  </script>
  {{ALERT}}
</body>
</html>
"#;

const CONFIRM_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>Confirm unregister</title>
  <link rel="stylesheet" href="/style.css" />
</head>
<body>
  <main>
    <section>
      <p>{{QUESTION}}</p>
      <form method="post" action="/unregister">
        <input type="hidden" name="activity" value="{{ACTIVITY}}" />
        <input type="hidden" name="email" value="{{EMAIL}}" />
        <button type="submit" name="confirm" value="yes">OK</button>
        <button type="button" onclick="history.back()">Cancel</button>
      </form>
    </section>
  </main>
</body>
</html>
"#;

pub fn stylesheet() -> &'static str {
    STYLE
}
