use crate::actions;
use crate::configuration::DashboardSettings;
use crate::domain::CategoryFilter;
use crate::form_state::SubscribeForm;
use crate::startup::NewsletterDbConn;
use crate::views;
use rocket::http::Header;
use rocket::response::content::RawHtml;
use rocket::State;
use uuid::Uuid;

struct CacheControl {
    max_age: u32,
}

impl<'h> From<CacheControl> for Header<'h> {
    fn from(cache_control: CacheControl) -> Self {
        Header::new(
            "Cache-Control",
            format!("public, max-age={}", cache_control.max_age),
        )
    }
}

/// A rendered page that may be served from cache until it is `max_age`
/// seconds old.
#[derive(Responder)]
pub struct Revalidated {
    inner: RawHtml<String>,
    cache_control: CacheControl,
}

#[tracing::instrument(
    name = "Rendering the dashboard",
    skip(category, conn, settings),
    fields(request_id = %Uuid::new_v4())
)]
#[get("/?<category>")]
pub async fn dashboard(
    category: Option<String>,
    conn: NewsletterDbConn,
    settings: &State<DashboardSettings>,
) -> Revalidated {
    let feed = actions::load_dashboard(&conn, settings.news_limit).await;
    let filter = CategoryFilter::parse(category.as_deref());
    Revalidated {
        inner: RawHtml(views::render_dashboard(
            &feed,
            filter,
            &SubscribeForm::default(),
        )),
        cache_control: CacheControl {
            max_age: settings.revalidate_seconds,
        },
    }
}
