use ether_showcase::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        section: args.opt_value_from_str("--section").unwrap(),
        page: args.opt_value_from_str("--page").unwrap(),
        gallery_url: args.opt_value_from_str("--gallery-url").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
    };

    app::run(flags)
}
