use std::sync::Arc;

use showcase_components::{Keyed, List, ListProps};
use showcase_core::Component;

struct Contact {
	id: i64,
	email: String,
}

impl Keyed for Contact {
	fn id(&self) -> i64 {
		self.id
	}
}

fn main() {
	let list = List::new(ListProps::new(
		vec![Contact {
			id: 1,
			email: "ann@example.com".to_string(),
		}],
		|contact: Arc<Contact>| {
			let _ = contact.email.len();
		},
	));
	let _ = list.render().render_to_string();
}
