use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use super::{Book, DueDateOutOfRange, Isbn, LoanId, LoanRejection};

/// 返却期限が設定される数字合計のしきい値（この値を超えると期限あり）
pub const DIGIT_SUM_THRESHOLD: u32 = 30;

/// 金曜・土曜に貸し出した場合の返却期限（日数）
const DAYS_FROM_FRIDAY_OR_SATURDAY: u64 = 17;

/// それ以外の曜日に貸し出した場合の返却期限（日数）
const DAYS_FROM_OTHER_WEEKDAYS: u64 = 16;

/// 貸出記録 - 承認された1回の貸出
///
/// 台帳に追加された後は台帳が所有し、このクレートからは変更も削除もしない。
/// `book`はカタログの書籍への参照（コピー）であり、書籍を所有しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub loan_id: LoanId,
    pub request_date: NaiveDate,
    pub book: Book,
    /// 数字合計が30以下の場合はNone（返却期限なし）
    pub max_return_date: Option<NaiveDate>,
    pub borrower_name: String,
}

/// 純粋関数：ISBNが回文か判定する
///
/// 両端から内側へ文字を比較する。大文字小文字は区別する。
/// 奇数長の中央の文字は自分自身と一致するので比較しない。
pub fn is_palindrome(isbn: &str) -> bool {
    let chars: Vec<char> = isbn.chars().collect();
    let len = chars.len();

    (0..len / 2).all(|i| chars[i] == chars[len - 1 - i])
}

/// 純粋関数：貸出可能なISBNか検証する
///
/// ビジネスルール：回文のISBNを持つ書籍は館内でのみ利用でき、貸出不可。
pub fn ensure_lendable(isbn: &Isbn) -> Result<(), LoanRejection> {
    if is_palindrome(isbn.as_str()) {
        return Err(LoanRejection::PalindromeRestricted);
    }
    Ok(())
}

fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// 10進数字（Unicodeの一般カテゴリNd）の値
///
/// Nd の文字は必ず 0 から 9 の連続した10文字単位で符号化されるため、
/// 連続するNdの先頭からの距離を10で割った余りが値になる。
/// 数学用英数字記号のように複数の単位が隣接する場合もこれで成り立つ。
fn decimal_digit_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        return c.to_digit(10);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut zero = c as u32;
    while let Some(prev) = zero.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        zero -= 1;
    }
    Some((c as u32 - zero) % 10)
}

/// 純粋関数：ISBNに含まれる数字の合計
///
/// ASCII以外の10進数字（アラビア・インド数字、全角数字など）も値として数える。
/// 数字以外の文字は0として扱い、エラーにはしない。
pub fn isbn_digit_sum(isbn: &str) -> u32 {
    isbn.chars().filter_map(decimal_digit_value).sum()
}

/// 純粋関数：返却期限を設定すべきか
pub fn requires_max_return_date(isbn: &str) -> bool {
    isbn_digit_sum(isbn) > DIGIT_SUM_THRESHOLD
}

/// 純粋関数：返却期限を計算する
///
/// 15日間から日曜日を除いた期間を、貸出日の曜日による固定の日数で表す：
/// - 金曜・土曜：+17日
/// - それ以外：+16日
///
/// 汎用の「日曜日をスキップする」ループでは計算しない。
///
/// # エラー
/// 日付がカレンダーの範囲外になる場合は`DueDateOutOfRange`を返す
pub fn compute_max_return_date(request_date: NaiveDate) -> Result<NaiveDate, DueDateOutOfRange> {
    let days = match request_date.weekday() {
        Weekday::Fri | Weekday::Sat => DAYS_FROM_FRIDAY_OR_SATURDAY,
        _ => DAYS_FROM_OTHER_WEEKDAYS,
    };

    request_date
        .checked_add_days(Days::new(days))
        .ok_or(DueDateOutOfRange { request_date })
}

/// 純粋関数：貸出記録を作成する
///
/// ビジネスルール：
/// - ISBNの数字合計が30を超える場合のみ返却期限を設定する
/// - それ以外は返却期限なし
///
/// 副作用なし。台帳への保存は呼び出し側の責務。
pub fn open_loan(
    book: Book,
    borrower_name: String,
    request_date: NaiveDate,
) -> Result<LoanRecord, DueDateOutOfRange> {
    let max_return_date = if requires_max_return_date(book.isbn.as_str()) {
        Some(compute_max_return_date(request_date)?)
    } else {
        None
    };

    Ok(LoanRecord {
        loan_id: LoanId::new(),
        request_date,
        book,
        max_return_date,
        borrower_name,
    })
}
