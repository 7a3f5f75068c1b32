use axum::response::Html;

use crate::management::Session;

// Rendering is intentionally minimal; a real front end talks to the JSON
// endpoints.
const LANDING_PAGE: &str = "<h2>Monthly Replay</h2>\
<p><a href=\"/login\">Log in with Spotify</a> to rebuild a month of your listening as a playlist.</p>";

const GENERATE_PAGE: &str = r#"<h2>Monthly Replay</h2>
<form action="/playlist" method="post">
  <input name="year" type="number" min="2008" placeholder="Year">
  <input name="month" type="number" min="1" max="12" placeholder="Month">
  <button type="submit">Build playlist</button>
</form>"#;

pub async fn index(session: Option<Session>) -> Html<&'static str> {
    if session.is_some() {
        Html(GENERATE_PAGE)
    } else {
        Html(LANDING_PAGE)
    }
}

pub async fn about() -> Html<&'static str> {
    Html("<h2>About</h2><p>Monthly Replay aggregates your saved tracks, top tracks, new releases and recommendations into one playlist per month.</p>")
}

pub async fn contact() -> Html<&'static str> {
    Html("<h2>Contact</h2><p>Open an issue on the project repository.</p>")
}

pub async fn privacy() -> Html<&'static str> {
    Html("<h2>Privacy</h2><p>Tokens live in memory for the duration of your session and are never written to disk.</p>")
}
