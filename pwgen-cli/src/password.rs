use std::io::Write;

use pwgen_lib::zeroize::Zeroizing;

pub fn request_password(prompt: &str) -> Result<Zeroizing<String>, std::io::Error> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    Ok(Zeroizing::new(rpassword::read_password()?))
}
