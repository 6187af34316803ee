use std::{net::IpAddr, sync::Arc};

use axum::Router;
use folio_core_contact_contracts::ContactService;
use tokio::net::TcpListener;

mod errors;
mod middlewares;
mod models;
mod routes;

pub use routes::contact::CONTACT_ROUTE;

#[derive(Debug, Clone)]
pub struct RestServer<Contact> {
    contact: Arc<Contact>,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactService,
{
    pub fn new(contact: Contact) -> Self {
        Self {
            contact: contact.into(),
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let router = Router::new().merge(routes::contact::router(self.contact));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
