use arboard::Clipboard;
use log::info;

pub fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = Clipboard::new()?;

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;

        // On linux the selection is served by this process, it has to stay
        // alive until another program takes the clipboard over
        println!("Copied to clipboard, waiting until it is replaced");
        info!("holding clipboard ownership");
        clipboard.set().wait().text(text)?;
    }

    #[cfg(not(target_os = "linux"))]
    {
        clipboard.set_text(text)?;
        info!("clipboard set");
        println!("Copied to clipboard");
    }

    Ok(())
}
