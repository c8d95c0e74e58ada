use crate::models::AnimalId;
use lazy_static::lazy_static;
use url::Url;

pub static DEFAULT_API_URL: &'static str = "http://localhost:3000";
static COLLECTION: &'static str = "characters";

lazy_static! {
    static ref DEFAULT_URL: Url = match Url::parse(DEFAULT_API_URL) {
        Ok(url) => url,
        Err(e) => panic!("invalid default API URL {}: {}", DEFAULT_API_URL, e),
    };
}

// Host page element ids.
pub static LIST_ID: &'static str = "addAnimalList";
pub static DETAILS_ID: &'static str = "addAnimalDetails";
pub static FORM_ID: &'static str = "addAnimalForm";
pub static NAME_INPUT_ID: &'static str = "nameAnimal";
pub static IMAGE_INPUT_ID: &'static str = "imageAnimal";
pub static VOTE_COUNT_ID: &'static str = "voteCount";
pub static UPVOTE_BUTTON_ID: &'static str = "upvoteBtn";
pub static DOWNVOTE_BUTTON_ID: &'static str = "downvoteBtn";
pub static RESET_BUTTON_ID: &'static str = "resetBtn";

/// Where the backend lives. The host page may override the default with
/// `<meta name="api-url" content="...">`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: Url,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_URL.clone(),
        }
    }
}

impl Config {
    /// Build a config from an optional override, falling back to the default
    /// when it is absent or unparsable.
    pub fn from_override(api_url: Option<&str>) -> Config {
        let raw = match api_url.map(str::trim) {
            Some(v) if !v.is_empty() => v,
            _ => return Config::default(),
        };
        match Url::parse(raw) {
            Ok(api_url) if !api_url.cannot_be_a_base() => Config { api_url },
            _ => {
                crate::console_errorf!(
                    "Ignoring invalid api-url {:?}, using {}",
                    raw,
                    DEFAULT_API_URL
                );
                Config::default()
            }
        }
    }

    /// Read the override from the host page, if there is one.
    pub fn from_document(document: &web_sys::Document) -> Config {
        let content = document
            .query_selector("meta[name=\"api-url\"]")
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"));
        Config::from_override(content.as_deref())
    }

    /// `<base>/characters`
    pub fn collection_url(&self) -> Url {
        self.with_segments(&[COLLECTION])
    }

    /// `<base>/characters/<id>`, with the id percent-encoded as one segment.
    pub fn animal_url(&self, id: &AnimalId) -> Url {
        self.with_segments(&[COLLECTION, &id.to_string()])
    }

    fn with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        // cannot_be_a_base URLs are rejected when the config is built
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
