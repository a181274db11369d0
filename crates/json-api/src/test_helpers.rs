//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use kasir_app::{
    categories::{
        MockCategoriesService,
        records::{CategoryRecord, CategoryUuid},
    },
    context::AppContext,
    products::{
        MockProductsService,
        records::{ProductRecord, ProductUuid},
    },
    transactions::{
        MockTransactionsService,
        records::{
            TransactionDetailRecord, TransactionDetailUuid, TransactionRecord, TransactionUuid,
        },
    },
};

use crate::{router, state::State};

fn state(
    categories: MockCategoriesService,
    products: MockProductsService,
    transactions: MockTransactionsService,
) -> Arc<State> {
    State::from_app_context(AppContext::new(
        Arc::new(categories),
        Arc::new(products),
        Arc::new(transactions),
    ))
}

fn service(state: Arc<State>, route: Router) -> Service {
    router::service(Router::new().hoop(inject(state)).push(route))
}

/// Mocks left without expectations fail the test if they are called.
pub(crate) fn categories_service(categories: MockCategoriesService, route: Router) -> Service {
    service(
        state(
            categories,
            MockProductsService::new(),
            MockTransactionsService::new(),
        ),
        route,
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(
        state(
            MockCategoriesService::new(),
            products,
            MockTransactionsService::new(),
        ),
        route,
    )
}

pub(crate) fn transactions_service(
    transactions: MockTransactionsService,
    route: Router,
) -> Service {
    service(
        state(
            MockCategoriesService::new(),
            MockProductsService::new(),
            transactions,
        ),
        route,
    )
}

pub(crate) fn make_category(uuid: CategoryUuid, name: &str) -> CategoryRecord {
    CategoryRecord {
        uuid,
        name: name.to_string(),
        description: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_product(uuid: ProductUuid, name: &str, price: u64, stock: u32) -> ProductRecord {
    ProductRecord {
        uuid,
        name: name.to_string(),
        price,
        stock,
        category: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

/// A sale of `quantity` units of one product at `unit_price`.
pub(crate) fn make_transaction(
    uuid: TransactionUuid,
    product: ProductUuid,
    quantity: u32,
    unit_price: u64,
) -> TransactionRecord {
    let subtotal = unit_price * u64::from(quantity);

    TransactionRecord {
        uuid,
        total_amount: subtotal,
        created_at: Timestamp::UNIX_EPOCH,
        details: vec![TransactionDetailRecord {
            uuid: TransactionDetailUuid::new(),
            transaction: uuid,
            product,
            product_name: "Kopi Susu".to_string(),
            quantity,
            unit_price,
            subtotal,
        }],
    }
}
