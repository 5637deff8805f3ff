use lostfound_matcher::db::establish_connection_pool;
use lostfound_matcher::models::config::ServerConfig;
use lostfound_matcher::processing::matching::process_match_message;
use lostfound_matcher::processing::{MatchError, MatchMessage, MatchReply};
use lostfound_matcher::repository::DieselRepository;
use lostfound_matcher::worker::Responder;

async fn handle_request(msg: &[u8], repo: &DieselRepository) -> MatchReply {
    let parsed = match MatchMessage::from_slice(msg) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::error!("Rejected match request: {e}");
            return MatchReply::from(Err(e));
        }
    };

    let repo = repo.clone();
    let outcome = tokio::task::spawn_blocking(move || process_match_message(parsed, &repo))
        .await
        .unwrap_or_else(|e| Err(MatchError::Task(e.to_string())));

    MatchReply::from(outcome)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let context = zmq::Context::new();
    let mut responder = match Responder::bind(&context, &config.zmq_address) {
        Ok(responder) => responder,
        Err(e) => {
            log::error!("Cannot bind to {}: {e}", config.zmq_address);
            std::process::exit(1);
        }
    };
    log::info!("Matcher listening on {}", config.zmq_address);

    loop {
        let msg = match responder.recv() {
            Ok(msg) => msg,
            Err(e) => {
                log::error!("Failed to receive request: {e}");
                continue;
            }
        };

        let reply = handle_request(&msg, &repo).await;
        let payload = match serde_json::to_vec(&reply) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("Failed to serialize reply: {e}");
                br#"{"status":"failed","error":"internal error"}"#.to_vec()
            }
        };

        if let Err(e) = responder.reply(&payload) {
            log::error!("Cannot restore {} after a failed reply: {e}", config.zmq_address);
            std::process::exit(1);
        }
    }
}
