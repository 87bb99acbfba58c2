use async_trait::async_trait;
use futures::{StreamExt, stream};
use reqwest::redirect::Policy;
use std::time::Instant;

use crate::config::Config;
use crate::error::Result;
use crate::logging::log_check_result;
use crate::progress::ProgressReporter;
use crate::types::{
    BatchReport, CheckRequest, CheckResult, Classification, RequestMethod, validate_url,
};

#[async_trait]
pub trait CheckUrls {
    /// Check every URL in `urls` and return one result per input, in
    /// input order. Only configuration problems fail the call; per-URL
    /// failures are folded into the report.
    async fn check_urls(
        &self,
        urls: Vec<String>,
        config: &Config,
        progress: Option<&mut ProgressReporter>,
    ) -> Result<BatchReport>;
}

/// The batch URL verification engine.
///
/// Stateless; each `check_urls` call builds its own short-lived HTTP
/// client and returns everything it produced. Redirects are never
/// followed - a 3xx is reported as the outcome itself.
#[derive(Default, Debug)]
pub struct Checker {}

#[async_trait]
impl CheckUrls for Checker {
    async fn check_urls(
        &self,
        urls: Vec<String>,
        config: &Config,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<BatchReport> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::none())
            .user_agent(config.user_agent().to_string())
            .default_headers(config.header_map()?)
            .build()?;

        let timeout = config.timeout_duration();
        let method = config.request_method();
        let concurrency_limit = config.concurrency_limit();
        let total = urls.len();

        if let Some(ref mut prog) = progress {
            prog.start_batch(total);
        }

        let requests = urls.into_iter().map(move |url| CheckRequest {
            url,
            timeout,
            method,
        });

        let mut completions = stream::iter(requests.enumerate())
            .map(|(index, request)| {
                let client = &client;
                async move {
                    // Malformed URLs are classified without touching the network
                    let result = match validate_url(&request.url) {
                        Ok(()) => execute_request(client, request).await,
                        Err(detail) => CheckResult::invalid(request.url, detail),
                    };
                    (index, result)
                }
            })
            .buffer_unordered(concurrency_limit);

        // Positional slots keep input order no matter how checks complete
        let mut slots: Vec<Option<CheckResult>> = Vec::with_capacity(total);
        slots.resize_with(total, || None);
        let mut completed = 0;

        while let Some((index, result)) = completions.next().await {
            completed += 1;
            log_check_result(&result);
            if let Some(ref prog) = progress {
                prog.on_result(completed, &result);
            }
            slots[index] = Some(result);
        }
        drop(completions);

        let results: Vec<CheckResult> = slots
            .into_iter()
            .map(|slot| slot.expect("every input slot receives exactly one result"))
            .collect();

        let report = BatchReport::from_results(results);

        if let Some(ref prog) = progress {
            prog.finish_batch(report.count(Classification::Ok), total);
        }

        Ok(report)
    }
}

/// Issue a single request and classify whatever comes back.
async fn execute_request(client: &reqwest::Client, request: CheckRequest) -> CheckResult {
    let CheckRequest {
        url,
        timeout,
        method,
    } = request;
    let target = url.trim().to_string();

    let started = Instant::now();
    let builder = match method {
        RequestMethod::Get => client.get(&target),
        RequestMethod::Head => client.head(&target),
    };

    match builder.timeout(timeout).send().await {
        Ok(response) => {
            CheckResult::from_status(url, response.status().as_u16(), started.elapsed())
        }
        Err(err) => {
            let classification = if err.is_timeout() {
                Classification::Timeout
            } else {
                Classification::ConnectionError
            };
            let detail = std::error::Error::source(&err)
                .map(|e| e.to_string())
                .unwrap_or_else(|| err.to_string());
            CheckResult::from_failure(url, classification, detail, started.elapsed())
        }
    }
}
