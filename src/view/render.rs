//! Plain-text and HTML renderers for a [`ProfileCard`].

use super::card::{NotFoundCard, PassengerCard, ProfileCard};

/// Terminal rendering used by the CLI.
pub fn render_text(card: &ProfileCard) -> String {
    match card {
        ProfileCard::Resolved(p) => {
            let mut out = String::new();
            out.push_str(&format!("< {}    {}    {} >\n", p.previous.id, p.name, p.next.id));
            if !p.role.is_empty() {
                out.push_str(&format!("{}\n", p.role));
            }
            out.push_str(&format!("[{}]\n", p.image));
            out.push_str(&format!("{}{}\n", p.bio_label, p.bio));
            out
        }
        ProfileCard::NotFound(nf) | ProfileCard::Empty(nf) => {
            format!("{}\n<- {}\n", nf.message, nf.back_label)
        }
    }
}

/// Builds a minimal HTML fragment for the card.
pub fn render_html(card: &ProfileCard) -> String {
    match card {
        ProfileCard::Resolved(p) => passenger_html(p),
        ProfileCard::NotFound(nf) | ProfileCard::Empty(nf) => not_found_html(nf),
    }
}

fn passenger_html(p: &PassengerCard) -> String {
    format!(
        r#"<div class="passenger-profile" lang="{locale}">
  <nav>
    <a class="previous" href="{prev}">&lsaquo;</a>
    <img src="{image}" alt="{alt}">
    <a class="next" href="{next}">&rsaquo;</a>
  </nav>
  <h1>{name}</h1>
  <p class="role">{role}</p>
  <p class="bio"><strong>{label}</strong>{bio}</p>
</div>
"#,
        locale = html_escape(&p.locale),
        prev = html_escape(&p.previous.path),
        next = html_escape(&p.next.path),
        image = html_escape(&p.image),
        alt = html_escape(&p.image_alt),
        name = html_escape(&p.name),
        role = html_escape(&p.role),
        label = html_escape(&p.bio_label),
        bio = html_escape(&p.bio),
    )
}

fn not_found_html(nf: &NotFoundCard) -> String {
    format!(
        r#"<div class="passenger-not-found" lang="{locale}">
  <p>{message}</p>
  <button onclick="history.back()">{back}</button>
</div>
"#,
        locale = html_escape(&nf.locale),
        message = html_escape(&nf.message),
        back = html_escape(&nf.back_label),
    )
}

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
