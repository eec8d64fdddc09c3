use showcase_components::{ListProps, list};

struct Contact;

fn main() {
	let _ = list(ListProps::new([Contact], |_| {}));
}
