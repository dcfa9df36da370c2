fn main() {
    if let Err(e) = statesearch::solver() {
        eprintln!("{:#}", e);
        ::std::process::exit(1);
    }
}
