use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use relay_api::{
    AppState,
    cache::RedisCache,
    config::Config,
    create_router,
    database::{PgUserStore, connect_pool},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    #[cfg(debug_assertions)]
    tracing::info!("Running in debug mode with CORS enabled");

    #[cfg(not(debug_assertions))]
    tracing::info!("Running in production mode with CORS disabled");

    if config.expose_error_details {
        tracing::warn!("EXPOSE_ERROR_DETAILS is on, raw backend errors will be sent to clients");
    }

    // 数据库连接池，第一次查询时才真正连接
    let pool = connect_pool(&config);

    // Redis 在后台预连接，失败只记录警告，不阻塞端口绑定
    let redis = match RedisCache::open(&config.redis_url()) {
        Ok(redis) => Arc::new(redis),
        Err(e) => {
            tracing::error!("Invalid Redis URL {}: {}", config.redis_url(), e);
            std::process::exit(1);
        }
    };
    let warm = redis.clone();
    let redis_url = config.redis_url();
    tokio::spawn(async move {
        match warm.warm_up().await {
            Ok(()) => tracing::info!("Connected to Redis at {}", redis_url),
            Err(e) => tracing::warn!("Redis not reachable yet, will retry on demand: {}", e),
        }
    });

    let state = AppState::new(Arc::new(PgUserStore::new(pool)), redis)
        .with_error_details(config.expose_error_details);

    let app = create_router(state);

    // 启动服务器
    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to 0.0.0.0");
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("API running on port {}", config.server_port);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
