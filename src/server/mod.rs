//! Server initialization and routing

use crate::api;
use crate::config::Config;
use crate::jwt::JwtManager;
use crate::repository::{
    InMemoryDishRepository, InMemoryMenuRepository, InMemoryOrderRepository,
    InMemoryRestaurantRepository, InMemoryUserRepository,
};
use crate::service::{
    AuthService, DishService, MenuService, OrderService, RestaurantService, UserService,
};
use crate::state::HasAuth;
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub jwt_manager: JwtManager,
    pub user_repo: Arc<InMemoryUserRepository>,
    pub auth_service: Arc<AuthService<InMemoryUserRepository>>,
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
    pub restaurant_service: Arc<RestaurantService<InMemoryRestaurantRepository>>,
    pub menu_service: Arc<
        MenuService<InMemoryMenuRepository, InMemoryRestaurantRepository, InMemoryDishRepository>,
    >,
    pub dish_service: Arc<DishService<InMemoryDishRepository, InMemoryUserRepository>>,
    pub order_service: Arc<OrderService<InMemoryOrderRepository, InMemoryDishRepository>>,
}

impl HasAuth for AppState {
    type UserRepo = InMemoryUserRepository;

    fn jwt_manager(&self) -> &JwtManager {
        &self.jwt_manager
    }

    fn user_repo(&self) -> &Arc<InMemoryUserRepository> {
        &self.user_repo
    }
}

/// Build application state with fresh in-memory stores
pub fn build_state(config: Config) -> AppState {
    let jwt_manager = JwtManager::new(config.jwt.clone());

    let user_repo = Arc::new(InMemoryUserRepository::new());
    let restaurant_repo = Arc::new(InMemoryRestaurantRepository::new());
    let menu_repo = Arc::new(InMemoryMenuRepository::new());
    let dish_repo = Arc::new(InMemoryDishRepository::new());
    let order_repo = Arc::new(InMemoryOrderRepository::new());

    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        jwt_manager.clone(),
        config.validation.clone(),
    ));
    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let restaurant_service = Arc::new(RestaurantService::new(
        restaurant_repo.clone(),
        config.validation.clone(),
    ));
    let menu_service = Arc::new(MenuService::new(
        menu_repo,
        restaurant_repo,
        dish_repo.clone(),
        config.validation.clone(),
    ));
    let dish_service = Arc::new(DishService::new(
        dish_repo.clone(),
        user_repo.clone(),
        config.validation.clone(),
    ));
    let order_service = Arc::new(OrderService::new(order_repo, dish_repo));

    AppState {
        jwt_manager,
        user_repo,
        auth_service,
        user_service,
        restaurant_service,
        menu_service,
        dish_service,
        order_service,
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/register", post(api::auth::register))
        .route("/login", post(api::auth::login))
        .route("/Users", get(api::user::list))
        .route("/Users/changeRole/{userId}", post(api::user::change_role))
        .route(
            "/Restaurant",
            post(api::restaurant::create).get(api::restaurant::list),
        )
        .route("/Restaurant/{id}", get(api::restaurant::get))
        .route("/Menu", get(api::menu::list))
        .route("/Menu/{id}", post(api::menu::create).get(api::menu::get))
        .route("/Menu/{menuId}/{dishId}", post(api::menu::attach_dish))
        .route("/Dish", get(api::dish::list))
        .route("/Dish/{id}", post(api::dish::create).get(api::dish::get))
        .route("/Order", get(api::order::list))
        .route("/Order/status/{orderId}", post(api::order::change_status))
        .route("/Order/{id}", post(api::order::create).get(api::order::get))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    let addr = config.http_addr();
    let state = build_state(config);
    let app = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server is running on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
