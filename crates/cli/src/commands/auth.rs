//! Account commands: login, register, whoami, logout.
//!
//! # Usage
//!
//! ```bash
//! qn login -e lan@example.com
//! qn register -n "Trần Thị Lan" -e lan@example.com -t 0912345678
//! qn whoami
//! qn logout
//! ```

use std::io::{self, BufRead, Write};

use quanngon_api::Api;
use quanngon_core::{Email, Phone};
use quanngon_shell::{Severity, SessionShell};

use super::CommandError;

/// Sign in and persist the access token.
#[allow(clippy::print_stdout)]
pub async fn login(
    shell: &SessionShell,
    email: &str,
    password: Option<String>,
) -> Result<(), CommandError> {
    let password = match password {
        Some(password) => password,
        None => prompt_password()?,
    };

    let profile = shell.sign_in(email, &password).await?;
    println!(
        "{} Đăng nhập thành công! Xin chào {}.",
        Severity::Success.symbol(),
        profile.name
    );
    Ok(())
}

/// Create a customer account. Mirrors the registration form's checks
/// before the request goes out.
#[allow(clippy::print_stdout)]
pub async fn register(
    api: &Api,
    name: &str,
    email: &str,
    phone: &str,
    password: Option<String>,
) -> Result<(), CommandError> {
    if name.trim().chars().count() < 2 {
        return Err(CommandError::Message(
            "Họ tên phải có ít nhất 2 ký tự".to_string(),
        ));
    }
    Email::parse(email).map_err(|_| {
        CommandError::Message("Vui lòng nhập địa chỉ email hợp lệ".to_string())
    })?;
    Phone::parse(phone)
        .map_err(|_| CommandError::Message("Số điện thoại không hợp lệ (VN)".to_string()))?;

    let password = match password {
        Some(password) => password,
        None => prompt_password()?,
    };
    if password.chars().count() < 6 {
        return Err(CommandError::Message(
            "Mật khẩu phải có ít nhất 6 ký tự".to_string(),
        ));
    }

    let user = api.auth().register(name, email, phone, &password).await?;
    println!(
        "{} Đăng ký thành công! Đăng nhập bằng `qn login -e {}` để đặt món.",
        Severity::Success.symbol(),
        user.email
    );
    Ok(())
}

/// Show who is signed in, refreshing the profile from the backend.
#[allow(clippy::print_stdout)]
pub async fn whoami(shell: &SessionShell) -> Result<(), CommandError> {
    match shell.resume().await {
        Some(profile) => {
            let role = if profile.is_admin() {
                "quản trị viên"
            } else {
                "khách hàng"
            };
            println!("{} <{}> ({role})", profile.name, profile.email);
            println!("id: {}", profile.id);
        }
        None => println!("Chưa đăng nhập."),
    }
    Ok(())
}

/// Drop the stored token.
#[allow(clippy::print_stdout)]
pub fn logout(shell: &SessionShell) -> Result<(), CommandError> {
    shell.sign_out()?;
    println!("{} Đã đăng xuất.", Severity::Success.symbol());
    Ok(())
}

#[allow(clippy::print_stdout)]
fn prompt_password() -> Result<String, CommandError> {
    print!("Mật khẩu: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}
