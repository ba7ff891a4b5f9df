pub mod excel;
pub mod pdf;

use crate::cli::ExportFormat;
use crate::error::{Result, SanadError};
use sanad_common::VoucherRecord;
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, stem: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", stem, extension))
    } else {
        output.to_path_buf()
    }
}

/// تنفيذ التصدير حسب الصيغة المطلوبة
///
/// PDF يطبع سنداً واحداً، وExcel يصدّر قائمة السندات كاملة.
/// يرجع مسارات الملفات المولدة.
pub fn export(
    voucher: Option<&VoucherRecord>,
    all_records: &[VoucherRecord],
    format: &ExportFormat,
    output: &Path,
    organization_name: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if matches!(format, ExportFormat::Pdf | ExportFormat::Both) {
        let record = voucher.ok_or_else(|| {
            SanadError::PdfGeneration("رقم السند مطلوب لطباعة PDF".to_string())
        })?;
        let path = output_path_for_format(output, &record.voucher_number, "pdf");
        pdf::generate_voucher_pdf(record, &path, organization_name)?;
        written.push(path);
    }

    if matches!(format, ExportFormat::Excel | ExportFormat::Both) {
        let path = output_path_for_format(output, "vouchers", "xlsx");
        excel::generate_voucher_list_excel(all_records, &path)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for_directory() {
        let path = output_path_for_format(Path::new("/tmp"), "V20231005-4821", "pdf");
        assert_eq!(path, PathBuf::from("/tmp/V20231005-4821.pdf"));
    }

    #[test]
    fn test_output_path_with_explicit_file() {
        let path = output_path_for_format(Path::new("/tmp/out.pdf"), "V1", "pdf");
        assert_eq!(path, PathBuf::from("/tmp/out.pdf"));
    }

    #[test]
    fn test_output_path_without_extension_treated_as_dir() {
        let path = output_path_for_format(Path::new("exports"), "vouchers", "xlsx");
        assert_eq!(path, PathBuf::from("exports/vouchers.xlsx"));
    }
}
