//! CSV input templates for new work-instruction records.

mod sheets;

use std::path::{Path, PathBuf};

use wimaint_core::{CsvTable, GeneratedFile};

/// Name of the plain-text usage guide written next to the templates.
pub const USAGE_GUIDE_FILE: &str = "使用説明.txt";

/// One spreadsheet template.
pub struct CsvTemplate {
    file_name: &'static str,
    table: CsvTable,
}

impl CsvTemplate {
    pub fn new(file_name: &'static str, table: CsvTable) -> Self {
        Self { file_name, table }
    }
}

impl GeneratedFile for CsvTemplate {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name)
    }

    fn render(&self) -> String {
        self.table.render()
    }
}

/// The usage guide (`使用説明.txt`).
pub struct UsageGuide;

impl GeneratedFile for UsageGuide {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(USAGE_GUIDE_FILE)
    }

    fn render(&self) -> String {
        sheets::USAGE_GUIDE.to_string()
    }
}

/// The nine sheets, in file-name order.
pub fn csv_templates() -> Vec<CsvTemplate> {
    vec![
        sheets::basic_info(),
        sheets::search_info(),
        sheets::procedure_overview(),
        sheets::work_steps(),
        sheets::cutting_conditions(),
        sheets::quality_checks(),
        sheets::troubleshooting(),
        sheets::related_info(),
        sheets::revision_history(),
    ]
}

/// Every file the templates command writes.
pub fn all() -> Vec<Box<dyn GeneratedFile>> {
    let mut files: Vec<Box<dyn GeneratedFile>> = csv_templates()
        .into_iter()
        .map(|t| Box::new(t) as Box<dyn GeneratedFile>)
        .collect();
    files.push(Box::new(UsageGuide));
    files
}

#[cfg(test)]
mod tests {
    use wimaint_core::UTF8_BOM;

    use super::*;

    #[test]
    fn test_file_names_in_order() {
        let names: Vec<_> = csv_templates().iter().map(|t| t.file_name).collect();
        assert_eq!(
            names,
            [
                "01_基本情報（必須）.csv",
                "02_検索・分類情報（必須）.csv",
                "03_作業手順概要.csv",
                "04_作業ステップ.csv",
                "05_切削条件.csv",
                "06_品質チェック.csv",
                "07_トラブルシューティング.csv",
                "08_関連情報.csv",
                "09_改訂履歴.csv",
            ]
        );
    }

    #[test]
    fn test_tables_are_rectangular() {
        for template in csv_templates() {
            let table = &template.table;
            assert!(!table.rows().is_empty(), "{} has no rows", template.file_name);
            for row in table.rows() {
                assert_eq!(row.len(), table.headers().len(), "{}", template.file_name);
            }
        }
    }

    #[test]
    fn test_basic_info_render() {
        let rendered = sheets::basic_info().render();
        let mut lines = rendered.lines();

        assert_eq!(lines.next(), Some("\u{feff}項目,必須/任意,値,説明"));
        assert_eq!(lines.next(), Some("図面番号,必須,0D127100014,図面の一意識別番号"));
        assert_eq!(rendered.lines().count(), 9);
    }

    #[test]
    fn test_comma_separated_values_are_quoted() {
        let rendered = sheets::search_info().render();
        assert!(rendered.contains(
            "キーワード,必須,\"ブラケット,チェーンソー,精密,加工,マシニング\",カンマ区切り\n"
        ));
    }

    #[test]
    fn test_empty_cells_stay_empty() {
        let rendered = sheets::work_steps().render();
        let second = rendered.lines().nth(2).unwrap();
        assert!(second.starts_with("2,ラジアルボール盤での穴あけ加工,"));
        assert!(second.ends_with(",caution,\"step02-drilling-setup.jpg,step02-hole-positioning.jpg,step02-drilling-process.jpg\","));
    }

    #[test]
    fn test_usage_guide_has_no_bom() {
        let guide = UsageGuide.render();
        assert!(!guide.starts_with(UTF8_BOM));
        assert!(guide.starts_with("図面データ入力CSVテンプレート使用説明\n"));
        for template in csv_templates() {
            assert!(guide.contains(template.file_name));
        }
    }

    #[test]
    fn test_all_includes_usage_guide() {
        let base = Path::new("out");
        let paths: Vec<_> = all().iter().map(|f| f.path(base)).collect();
        assert_eq!(paths.len(), 10);
        assert_eq!(paths[9], base.join(USAGE_GUIDE_FILE));
    }
}
