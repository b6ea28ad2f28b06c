//! User-facing texts. The bot speaks Russian to its users and reviewers.

pub const BUTTON_INSTRUCTION: &str = "📋 Инструкция";
pub const BUTTON_CHECK_GIFTS: &str = "🎁 Проверить подарки";

pub const WELCOME: &str = "👋 Добро пожаловать!\n\n\
Я бот для проверки файлов. Отправьте мне файлы формата .txt, .zip или .json\n\n\
Выберите опцию ниже:";

pub const MENU_PROMPT: &str = "Отправьте мне файл для проверки или выберите опцию:";

pub const INSTRUCTION: &str = "📋 ИНСТРУКЦИЯ:\n\n\
1. Отправьте боту файлы в формате:\n   \
• .txt - текстовые файлы\n   \
• .zip - архивные файлы\n   \
• .json - файлы данных\n\n\
2. Бот автоматически перешлет файлы в группу для проверки\n\n\
3. Используйте кнопку 'Проверить подарки' для проверки статуса\n\n\
4. Дождитесь результатов проверки от администраторов";

pub const CHECK_GIFTS_UNAVAILABLE: &str = "🎁 ПРОВЕРКА ПОДАРКОВ\n\n\
Функция проверки подарков временно недоступна.\n\
Администраторы работают над обновлением системы.\n\n\
Для проверки статуса ваших файлов обратитесь к администратору группы.";

pub const UNSUPPORTED_FORMAT: &str =
    "❌ Неподдерживаемый формат файла.\nЯ принимаю только .txt, .zip и .json файлы.";

pub const RELAY_FAILED: &str = "❌ Произошла ошибка при обработке файла. Попробуйте позже.";

pub const UNKNOWN_COMMAND: &str = "Используйте /start для начала работы";

/// Acknowledgment sent to the uploader once the file reached the review chat.
pub fn relay_success(file_name: &str) -> String {
    format!(
        "✅ Файл '{}' успешно отправлен на проверку!\n\n📋 Статус: В обработке\n⏳ Ожидайте результатов в группе",
        file_name
    )
}
