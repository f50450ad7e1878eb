//! Application constants and configuration defaults

pub const APP_NAME: &str = "POS Storefront";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend origin used when neither settings.json nor the environment names one
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

// Operator / store / register identifiers sent with every purchase
pub const DEFAULT_EMP_CD: &str = "9999999999";
pub const DEFAULT_STORE_CD: &str = "30";
pub const DEFAULT_POS_NO: &str = "90";

// Environment overrides (not persisted)
pub const ENV_BACKEND_URL: &str = "POS_BACKEND_URL";
pub const ENV_EMP_CD: &str = "POS_EMP_CD";
pub const ENV_STORE_CD: &str = "POS_STORE_CD";
pub const ENV_POS_NO: &str = "POS_NO";

/// Name given to the sentinel product shown for a lookup miss or fault
pub const NOT_REGISTERED_NAME: &str = "商品がマスタ未登録です";

// Display strings
pub const TITLE: &str = "POSアプリ";
pub const BARCODE_HINT: &str = "バーコードを入力";
pub const SEARCH_LABEL: &str = "検索";
pub const PRODUCT_HEADING: &str = "商品情報";
pub const ADD_TO_CART_LABEL: &str = "カートに追加";
pub const CART_HEADING: &str = "購入リスト";
pub const PURCHASE_LABEL: &str = "購入する";
pub const CART_EMPTY_MSG: &str = "カートが空です";
pub const PURCHASE_DONE_MSG: &str = "購入が完了しました。";
pub const PURCHASE_FAILED_MSG: &str = "購入処理に失敗しました";
pub const ERROR_DETAIL_LABEL: &str = "エラー詳細";
pub const OK_LABEL: &str = "OK";

/// Candidate system fonts with Japanese coverage, tried in order
pub const CJK_FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\YuGothM.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/takao-gothic/TakaoPGothic.ttf",
];
