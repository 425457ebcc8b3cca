use anyhow::Result;
use qrcode::render::unicode;
use qrcode::QrCode;

/// Render a scannable QR code of the studio URL for the terminal.
pub fn studio_qr(url: &str) -> Result<String> {
    let code = QrCode::new(url.as_bytes())?;
    let qr = code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build();

    let mut output = String::new();
    output.push('\n');
    output.push_str("Scan this QR code to open the studio:\n");
    output.push_str(&qr);
    output.push('\n');
    output.push_str(&format!("Or open: {}\n", url));

    Ok(output)
}
