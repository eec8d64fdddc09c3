use showcase_components::GreetProps;

fn main() {
	let _ = GreetProps {
		name: "Ann".to_string(),
		message_count: 3,
	};
}
