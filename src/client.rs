use crate::errors::ClientError;
use crate::models::{ActionReply, ActionResult, ActivityCatalog};
use reqwest::{Client, Method, Url};
use std::future::Future;
use tracing::debug;

pub trait ActivityApi {
    fn fetch_catalog(&self) -> impl Future<Output = Result<ActivityCatalog, ClientError>> + Send;
    fn signup(
        &self,
        activity: &str,
        email: &str,
    ) -> impl Future<Output = Result<ActionReply, ClientError>> + Send;
    fn unregister(
        &self,
        activity: &str,
        email: &str,
    ) -> impl Future<Output = Result<ActionReply, ClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpActivityApi {
    client: Client,
    base: Url,
}

impl HttpActivityApi {
    pub fn new(base: Url) -> Result<Self, ClientError> {
        let client = Client::builder().build()?;
        Ok(Self { client, base })
    }

    pub fn catalog_url(&self) -> Result<Url, ClientError> {
        self.endpoint(&["activities"])
    }

    // Activity name is one encoded path segment, the email a query value.
    pub fn action_url(&self, activity: &str, action: &str, email: &str) -> Result<Url, ClientError> {
        let mut url = self.endpoint(&["activities", activity, action])?;
        url.query_pairs_mut().append_pair("email", email);
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Url(format!("{} cannot be a base", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send_action(&self, method: Method, url: Url) -> Result<ActionReply, ClientError> {
        debug!("{method} {url}");
        let resp = self.client.request(method, url).send().await?;
        let ok = resp.status().is_success();
        let bytes = resp.bytes().await?;

        let result = if ok {
            serde_json::from_slice::<ActionResult>(&bytes)?
        } else {
            // An error body we cannot read still counts as a failed action.
            serde_json::from_slice::<ActionResult>(&bytes).unwrap_or_default()
        };

        Ok(ActionReply { ok, result })
    }
}

impl ActivityApi for HttpActivityApi {
    async fn fetch_catalog(&self) -> Result<ActivityCatalog, ClientError> {
        let url = self.catalog_url()?;
        debug!("GET {url}");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ActionResult>(&bytes)
                .ok()
                .and_then(|result| result.detail);
            return Err(ClientError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ActionReply, ClientError> {
        let url = self.action_url(activity, "signup", email)?;
        self.send_action(Method::POST, url).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ActionReply, ClientError> {
        let url = self.action_url(activity, "unregister", email)?;
        self.send_action(Method::DELETE, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpActivityApi {
        HttpActivityApi::new(Url::parse(base).unwrap()).unwrap()
    }

    #[test]
    fn catalog_url_joins_base() {
        assert_eq!(
            api("http://localhost:8000").catalog_url().unwrap().as_str(),
            "http://localhost:8000/activities"
        );
        assert_eq!(
            api("http://localhost:8000/api/").catalog_url().unwrap().as_str(),
            "http://localhost:8000/api/activities"
        );
    }

    #[test]
    fn action_url_encodes_name_and_email() {
        let url = api("http://localhost:8000")
            .action_url("Programming Class", "signup", "student+test@mergington.edu")
            .unwrap();
        assert_eq!(url.path(), "/activities/Programming%20Class/signup");

        let email = url
            .query_pairs()
            .find(|(key, _)| key == "email")
            .map(|(_, value)| value.into_owned());
        assert_eq!(email.as_deref(), Some("student+test@mergington.edu"));
    }

    #[test]
    fn action_url_keeps_slashes_inside_the_name() {
        let url = api("http://localhost:8000")
            .action_url("Arts/Crafts", "unregister", "a@x.com")
            .unwrap();
        assert_eq!(url.path(), "/activities/Arts%2FCrafts/unregister");
    }
}
