use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{Request, Response};
use micro_rest::negotiation::ContentNegotiator;
use micro_rest::response::{ErrorHandler, ErrorResponseResolver, ResponseTransformer};
use micro_rest::{DeriveEngine, FormatSerializer, RequestBodyResolver, RestConfig, RestError, Validator};
use serde::{Deserialize, Serialize};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
struct Candy {
    #[validate(length(min = 1))]
    name: String,
    #[validate(range(min = 1))]
    weight: u32,
}

const CONFIG: &str = r#"{
    "serialize": {
        "formats": {
            "json": ["application/json", "application/x-json"],
            "xml": ["application/xml", "text/xml"]
        },
        "format_default": "application/json"
    },
    "server": { "default_language": "en" }
}"#;

struct CandyService {
    bodies: RequestBodyResolver<FormatSerializer, DeriveEngine>,
    transformer: ResponseTransformer<FormatSerializer>,
    errors: ErrorHandler<FormatSerializer>,
}

impl CandyService {
    fn new(config: &RestConfig) -> Self {
        let serializer = FormatSerializer::from_config(&config.serialize);
        let negotiator = ContentNegotiator::new(&config.serialize);
        Self {
            bodies: RequestBodyResolver::new(serializer.clone(), Validator::default()),
            transformer: ResponseTransformer::new(negotiator.clone(), serializer.clone(), config.server.clone()),
            errors: ErrorHandler::new(ErrorResponseResolver::new(negotiator, serializer)),
        }
    }

    // echoes the posted candy back in whatever representation the client accepts
    fn handle(&self, request: &Request<Bytes>) -> Result<Response<Bytes>, RestError> {
        let result = self
            .bodies
            .resolve::<Candy, _>(request)
            .and_then(|candy| self.transformer.transform(&candy, request));

        match result {
            Ok(response) => Ok(response),
            Err(e) => self.errors.handle(e, request),
        }
    }
}

fn request(accept: &str, content_type: &str, body: &'static str) -> Request<Bytes> {
    Request::post("/candies")
        .header(ACCEPT, accept)
        .header(CONTENT_TYPE, content_type)
        .body(Bytes::from_static(body.as_bytes()))
        .expect("static request parts are valid")
}

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = match RestConfig::from_json_str(CONFIG) {
        Ok(config) => config,
        Err(e) => {
            error!(cause = %e, "invalid configuration");
            return;
        }
    };
    let service = CandyService::new(&config);

    let requests = [
        request("*/*", "application/json", r#"{"name":"Bonbon","weight":100}"#),
        request("text/xml, application/json;q=0.5", "application/json", r#"{"name":"Gum","weight":5}"#),
        request("application/xml", "text/xml", "<candy><name></name><weight>0</weight></candy>"),
        request("text/html", "application/json", r#"{"name":"Toffee","weight":20}"#),
        request("application/json", "application/json", r#"{"name":"#),
    ];

    for request in &requests {
        let accept = request.headers()[ACCEPT].to_str().unwrap_or_default();
        match service.handle(request) {
            Ok(response) => info!(
                accept,
                status = %response.status(),
                content_type = ?response.headers().get(CONTENT_TYPE),
                body = %String::from_utf8_lossy(response.body()),
                "responded"
            ),
            Err(e) => error!(accept, status = %e.status_code(), cause = %e, "request failed"),
        }
    }
}
