pub fn print_banner(version: &str) {
    let banner = format!(
        r#"
 ████████╗██████╗ ██╗██╗   ██╗██╗ █████╗
 ╚══██╔══╝██╔══██╗██║██║   ██║██║██╔══██╗    trivia
    ██║   ██████╔╝██║██║   ██║██║███████║    v{}
    ██║   ██╔══██╗██║╚██╗ ██╔╝██║██╔══██║
    ██║   ██║  ██║██║ ╚████╔╝ ██║██║  ██║
    ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═══╝  ╚═╝╚═╝  ╚═╝
"#,
        version
    );

    tracing::info!("{}", banner);
}
