//! App Router

use salvo::{Router, Service};

use crate::{categories, errors, healthcheck, observability::metrics_handler, products, transactions};

/// Routes served by the API, without the server-level hoops.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(
            Router::with_path("api")
                .push(
                    Router::with_path("produk")
                        .get(products::index::handler)
                        .post(products::create::handler)
                        .push(
                            Router::with_path("{product}")
                                .get(products::get::handler)
                                .put(products::update::handler)
                                .delete(products::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("kategori")
                        .get(categories::index::handler)
                        .post(categories::create::handler)
                        .push(
                            Router::with_path("{category}")
                                .get(categories::get::handler)
                                .put(categories::update::handler)
                                .delete(categories::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("checkout")
                        .post(transactions::checkout::handler)
                        .goal(errors::method_not_allowed),
                )
                .push(
                    Router::with_path("transactions/{transaction}")
                        .get(transactions::get::handler),
                ),
        )
}

/// Wrap a router in a service whose error responses are JSON.
pub(crate) fn service(router: Router) -> Service {
    Service::new(router).catcher(errors::catcher())
}
