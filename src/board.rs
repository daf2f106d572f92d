use crate::client::ActivityApi;
use crate::dispatch::dispatch;
use crate::models::{Command, Outcome};
use crate::render::render_catalog;
use crate::view::{LOAD_FAILED, ListContent, Page, Prompt};
use tracing::{error, info};

/// Page controller: the backend client plus the regions it draws into.
pub struct Board<A> {
    api: A,
    page: Page,
}

impl<A: ActivityApi> Board<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            page: Page::default(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub async fn load(&mut self) {
        refresh(&self.api, &mut self.page).await;
    }

    // An action may arrive before this session ever loaded the page.
    pub async fn ensure_loaded(&mut self) {
        if matches!(self.page.activities_list.content(), ListContent::Loading) {
            self.load().await;
        }
    }

    pub async fn dispatch<P: Prompt>(&mut self, command: Command, prompt: &mut P) -> Outcome {
        dispatch(&self.api, &mut self.page, prompt, command).await
    }
}

pub async fn refresh<A: ActivityApi>(api: &A, page: &mut Page) -> bool {
    match api.fetch_catalog().await {
        Ok(catalog) => {
            info!("loaded {} activities", catalog.len());
            render_catalog(
                &catalog,
                &mut page.activities_list,
                &mut page.signup_form.activity,
            );
            true
        }
        Err(err) => {
            error!("failed to fetch activities: {err}");
            page.activities_list.show_fallback(LOAD_FAILED);
            false
        }
    }
}
