use showcase_components::{GreetProps, greet};

fn main() {
	let page = greet(GreetProps {
		name: "Ann".to_string(),
		message_count: 3,
		is_logged_in: true,
	});
	let _ = page.render_to_string();
}
