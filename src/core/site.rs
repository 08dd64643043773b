/// Server-side facts about where the site is deployed.
///
/// The host provides this as context for each render; absent outside a
/// configured deployment (tests, the 404 page).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteMeta {
    /// Absolute URL of the landing page, used for the canonical link and
    /// `og:url`
    pub canonical_url: Option<String>,
}
