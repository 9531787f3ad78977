//! Site entry point
//!
//! [`NewsSite`] owns the collaborators (store, actor resolver, settings) and
//! dispatches one request at a time to the matching view.

use crate::http::{Request, Response};
use crate::routes::Route;
use crate::views;
use newsroom_auth::ActorResolver;
use newsroom_conf::{Settings, SettingsResult};
use newsroom_db::Store;
use newsroom_forms::ContentFilter;
use std::sync::Arc;

pub struct NewsSite {
	store: Arc<dyn Store>,
	resolver: Arc<dyn ActorResolver>,
	settings: Settings,
	filter: ContentFilter,
}

impl NewsSite {
	/// Builds a site after validating `settings`.
	pub fn new(
		store: Arc<dyn Store>,
		resolver: Arc<dyn ActorResolver>,
		settings: Settings,
	) -> SettingsResult<Self> {
		settings.validate()?;
		let filter = ContentFilter::from_settings(&settings);
		Ok(Self {
			store,
			resolver,
			settings,
			filter,
		})
	}

	pub fn store(&self) -> &dyn Store {
		self.store.as_ref()
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	pub fn filter(&self) -> &ContentFilter {
		&self.filter
	}

	/// Handles one request.
	///
	/// Unknown paths get 404 without consulting the actor resolver.
	pub async fn handle(&self, request: Request) -> Response {
		let Some(route) = Route::resolve(&request.path) else {
			tracing::debug!(path = %request.path, "No route matched");
			return Response::not_found();
		};

		let actor = self.resolver.resolve(request.session.as_deref()).await;
		tracing::debug!(%route, method = %request.method, %actor, "Dispatching request");

		let result = match route {
			Route::Home => views::home(self, &request, &actor).await,
			Route::Detail(id) => views::detail(self, &request, &actor, id).await,
			Route::Edit(id) => views::edit(self, &request, &actor, id).await,
			Route::Delete(id) => views::delete(self, &request, &actor, id).await,
			Route::Login | Route::Logout | Route::Signup => {
				views::auth_page(self, &request, &actor).await
			}
		};

		result.unwrap_or_else(Response::from)
	}
}
