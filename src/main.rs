use clap::Parser;
use sanad::{cli, config, error, export, form, session, store};

use cli::{Cli, Commands};
use config::Config;
use error::{Result, SanadError};
use sanad_common::{filter_vouchers, format_currency, format_date_ymd, to_arabic_digits};
use store::VoucherStore;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Login { username, password } => {
            let password = match password {
                Some(p) => p,
                None => dialoguer::Password::new()
                    .with_prompt("كلمة المرور")
                    .interact()
                    .map_err(|e| SanadError::Prompt(e.to_string()))?,
            };

            let session = session::login(&username, &password)?;
            println!("✔ تم تسجيل الدخول بنجاح");
            println!("مرحبًا بك {} في نظام صندوق تنمية الخدمات", session.user.name);
        }

        Commands::Logout => {
            if session::logout()? {
                println!("✔ تم تسجيل الخروج من النظام");
            } else {
                println!("لا توجد جلسة مسجلة");
            }
        }

        Commands::New { date } => {
            session::require_login()?;
            println!("🧾 سند صرف جديد\n");

            let date = match date {
                Some(s) => chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map_err(|_| SanadError::InvalidDate(s))?,
                None => chrono::Local::now().date_naive(),
            };

            // 1. الإدخال التفاعلي
            let draft = form::run_interactive_form(
                date.format("%Y-%m-%d").to_string(),
                config.due_policy(),
            )?;

            // 2. التحقق قبل الحفظ — فشل التحقق لا يفقد المدخلات المعروضة
            draft.validate()?;

            // 3. الحفظ في المخزن
            let voucher_number = store::generate_voucher_number(date);
            let created_at = chrono::Utc::now().to_rfc3339();
            let record = draft.into_record(voucher_number.clone(), created_at);

            let data_dir = config.data_dir()?;
            let mut store = VoucherStore::load(&data_dir);
            store.insert(record);
            store.save(&data_dir)?;

            if cli.verbose {
                println!("مسار المخزن: {}", VoucherStore::store_path(&data_dir).display());
            }
            println!("\n✅ تم حفظ السند بنجاح: {}", voucher_number);
        }

        Commands::List { mode, query } => {
            session::require_login()?;
            println!("📋 سندات الصرف\n");

            let data_dir = config.data_dir()?;
            let store = VoucherStore::load(&data_dir);
            let records = store.list_recent();
            let query = query.unwrap_or_default();
            let filtered = filter_vouchers(&records, mode, &query);

            if filtered.is_empty() {
                println!("لا توجد سندات مطابقة لمعايير البحث");
                return Ok(());
            }

            for record in &filtered {
                println!(
                    "{} | {} | {} | {} | المبلغ الإجمالي: {}",
                    record.voucher_number,
                    format_date_ymd(&record.date),
                    record.recipient_name,
                    record.location,
                    format_currency(record.total_amount),
                );
            }
            println!(
                "\nتم العثور على {} سند",
                to_arabic_digits(&filtered.len().to_string())
            );
        }

        Commands::Show { voucher_number } => {
            session::require_login()?;

            let data_dir = config.data_dir()?;
            let store = VoucherStore::load(&data_dir);
            let record = store
                .find_by_number(&voucher_number)
                .ok_or_else(|| SanadError::VoucherNotFound(voucher_number.clone()))?;

            println!("🧾 السند {}\n", record.voucher_number);
            println!("التاريخ: {}", format_date_ymd(&record.date));
            println!("الموقع: {}", record.location);
            println!("اسم المستلم: {}", record.recipient_name);
            if !record.recipient_phone.is_empty() {
                println!("رقم الهاتف: {}", record.recipient_phone);
            }

            println!("\nالصفوف:");
            for (index, row) in record.rows.iter().enumerate() {
                println!(
                    "  {}. كرت: {} | سند تحصيل: {} | تحسين: {} | غرامة: {} | مستحق: {}",
                    to_arabic_digits(&(index + 1).to_string()),
                    row.fine_card_number,
                    row.receipt_number,
                    format_currency(row.improvement_amount),
                    format_currency(row.fine_amount),
                    format_currency(row.due_amount),
                );
            }

            println!("\nإجمالي التحسين: {}", format_currency(record.improvement_amount));
            println!("إجمالي الغرامة: {}", format_currency(record.fine_amount));
            println!("المبلغ الإجمالي: {}", format_currency(record.total_amount));
            if let Some(notes) = &record.notes {
                println!("ملاحظات: {}", notes);
            }
        }

        Commands::Export {
            voucher_number,
            format,
            output,
        } => {
            session::require_login()?;
            println!("📄 تصدير السندات\n");

            let data_dir = config.data_dir()?;
            let store = VoucherStore::load(&data_dir);
            let records = store.list_recent();

            let voucher = match &voucher_number {
                Some(number) => Some(
                    store
                        .find_by_number(number)
                        .ok_or_else(|| SanadError::VoucherNotFound(number.clone()))?,
                ),
                None => None,
            };

            let output = output.unwrap_or_else(|| std::path::PathBuf::from("."));
            let written = export::export(
                voucher,
                &records,
                &format,
                &output,
                &config.organization_name,
            )?;

            for path in &written {
                println!("✔ تم إنشاء: {}", path.display());
            }
            println!("\n✅ اكتمل التصدير");
        }

        Commands::Config {
            set_organization,
            set_due_rule,
            show,
        } => {
            let mut config = config;

            if let Some(name) = set_organization {
                config.organization_name = name;
                config.save()?;
                println!("✔ تم تعيين اسم الجهة");
            }

            if let Some(rule) = set_due_rule {
                config.set_due_rule(&rule)?;
                println!("✔ تم تعيين قاعدة المبلغ المستحق: {}", config.due_policy());
            }

            if show {
                println!("الإعدادات:");
                println!("  اسم الجهة: {}", config.organization_name);
                println!("  قاعدة المبلغ المستحق: {}", config.due_policy());
                println!("  مجلد البيانات: {}", config.data_dir()?.display());
                match session::Session::load() {
                    Some(session) => println!("  الجلسة: {} ({})", session.user.name, session.user.username),
                    None => println!("  الجلسة: غير مسجلة"),
                }
            }
        }
    }

    Ok(())
}
