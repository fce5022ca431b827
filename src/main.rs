fn main() {
    if let Err(err) = passive_tree_svg::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
