//! Test server wrapper that starts Lumi on a random port

use std::net::SocketAddr;

use lumi_config::Config;
use lumi_server::Server;
use tokio_util::sync::CancellationToken;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let router = Server::new(&config)?.into_router();
        let shutdown = CancellationToken::new();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let cancelled = shutdown.clone();
        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move { cancelled.cancelled().await })
                .await
                .ok();
        });

        Ok(Self {
            addr,
            shutdown,
            client: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Upload a document to `/summarize`
    pub async fn upload(&self, file_name: &str, content: Vec<u8>, language: Option<&str>) -> reqwest::Response {
        let mut form = reqwest::multipart::Form::new()
            .part("file", reqwest::multipart::Part::bytes(content).file_name(file_name.to_owned()));

        if let Some(language) = language {
            form = form.text("language", language.to_owned());
        }

        self.client
            .post(self.url("/summarize"))
            .multipart(form)
            .send()
            .await
            .unwrap()
    }

    /// Submit a catalog key to `/summarize_book`
    pub async fn summarize_book(&self, book_key: &str, language: Option<&str>) -> reqwest::Response {
        let mut form = vec![("book_key", book_key)];
        if let Some(language) = language {
            form.push(("language", language));
        }

        self.client
            .post(self.url("/summarize_book"))
            .form(&form)
            .send()
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
