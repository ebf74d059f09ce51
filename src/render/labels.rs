use crate::domain::model::Language;

/// User-visible text for one display language.
#[derive(Debug)]
pub struct Labels {
    /// BCP 47 tag for the `lang` attribute.
    pub code: &'static str,
    pub app_title: &'static str,
    pub wind_speed_control: &'static str,
    pub wind_direction_control: &'static str,
    pub latitude_control: &'static str,
    pub depth_control: &'static str,
    pub view_control: &'static str,
    pub calculate_button: &'static str,
    pub calculating: &'static str,
    pub title_3d: &'static str,
    pub title_2d: &'static str,
    pub plot_title_3d: &'static str,
    pub plot_title_2d: &'static str,
    pub axis_east_west: &'static str,
    pub axis_north_south: &'static str,
    pub axis_depth: &'static str,
    pub depth: &'static str,
    pub wind: &'static str,
    pub transport: &'static str,
    pub spiral: &'static str,
    pub u_velocity: &'static str,
    pub v_velocity: &'static str,
    pub transport_components: &'static str,
    pub subplot_wind_vs_transport: &'static str,
    pub subplot_spiral: &'static str,
    pub subplot_profile: &'static str,
    pub subplot_components: &'static str,
    pub wind_stress: &'static str,
    pub ekman_transport_x: &'static str,
    pub ekman_transport_y: &'static str,
    pub ekman_depth: &'static str,
    pub coriolis_parameter: &'static str,
    pub total_transport: &'static str,
    pub energy_transfer: &'static str,
    pub transport_direction: &'static str,
    pub results_heading: &'static str,
    pub calculation_failed: &'static str,
}

static ENGLISH: Labels = Labels {
    code: "en",
    app_title: "Ekman Transport Explorer",
    wind_speed_control: "Wind speed (m/s)",
    wind_direction_control: "Wind direction",
    latitude_control: "Latitude",
    depth_control: "Depth",
    view_control: "View",
    calculate_button: "Calculate",
    calculating: "Calculating...",
    title_3d: "3D Ekman Transport Visualization",
    title_2d: "2D Ekman Transport Analysis",
    plot_title_3d: "Ekman Transport 3D Visualization",
    plot_title_2d: "Ekman Transport 2D Analysis",
    axis_east_west: "East-West (m/s)",
    axis_north_south: "North-South (m/s)",
    axis_depth: "Depth (m)",
    depth: "Depth",
    wind: "Wind",
    transport: "Transport",
    spiral: "Ekman Spiral",
    u_velocity: "U Velocity",
    v_velocity: "V Velocity",
    transport_components: "Transport Components",
    subplot_wind_vs_transport: "Wind vs Transport",
    subplot_spiral: "Ekman Spiral",
    subplot_profile: "Velocity by Depth",
    subplot_components: "Transport Components",
    wind_stress: "Wind Stress",
    ekman_transport_x: "Ekman Transport (X)",
    ekman_transport_y: "Ekman Transport (Y)",
    ekman_depth: "Ekman Depth",
    coriolis_parameter: "Coriolis Parameter",
    total_transport: "Total Transport",
    energy_transfer: "Energy Transfer Rate",
    transport_direction: "Transport Direction",
    results_heading: "Calculation Results",
    calculation_failed: crate::utils::error::GENERIC_FAILURE_MESSAGE,
};

static KOREAN: Labels = Labels {
    code: "ko",
    app_title: "에크만 수송 탐색기",
    wind_speed_control: "풍속 (m/s)",
    wind_direction_control: "풍향",
    latitude_control: "위도",
    depth_control: "깊이",
    view_control: "보기",
    calculate_button: "계산",
    calculating: "계산 중...",
    title_3d: "3D 에크만 수송 시각화",
    title_2d: "2D 에크만 수송 분석",
    plot_title_3d: "에크만 수송 3D 시각화",
    plot_title_2d: "에크만 수송 2D 분석",
    axis_east_west: "동-서 방향 (m/s)",
    axis_north_south: "남-북 방향 (m/s)",
    axis_depth: "깊이 (m)",
    depth: "깊이",
    wind: "바람",
    transport: "수송",
    spiral: "에크만 나선",
    u_velocity: "U 속도",
    v_velocity: "V 속도",
    transport_components: "수송 성분",
    subplot_wind_vs_transport: "바람 vs 수송",
    subplot_spiral: "에크만 나선",
    subplot_profile: "깊이별 속도",
    subplot_components: "수송 성분",
    wind_stress: "바람 응력",
    ekman_transport_x: "에크만 수송 (X)",
    ekman_transport_y: "에크만 수송 (Y)",
    ekman_depth: "에크만 깊이",
    coriolis_parameter: "코리올리 매개변수",
    total_transport: "총 수송량",
    energy_transfer: "에너지 전달률",
    transport_direction: "수송 방향",
    results_heading: "계산 결과",
    calculation_failed: "계산 중 오류가 발생했습니다. 다시 시도해주세요.",
};

static CHINESE: Labels = Labels {
    code: "zh",
    app_title: "埃克曼输运探索器",
    wind_speed_control: "风速 (m/s)",
    wind_direction_control: "风向",
    latitude_control: "纬度",
    depth_control: "深度",
    view_control: "视图",
    calculate_button: "计算",
    calculating: "计算中...",
    title_3d: "3D 埃克曼输运可视化",
    title_2d: "2D 埃克曼输运分析",
    plot_title_3d: "埃克曼输运 3D 可视化",
    plot_title_2d: "埃克曼输运 2D 分析",
    axis_east_west: "东-西方向 (m/s)",
    axis_north_south: "南-北方向 (m/s)",
    axis_depth: "深度 (m)",
    depth: "深度",
    wind: "风",
    transport: "输运",
    spiral: "埃克曼螺旋",
    u_velocity: "U 速度",
    v_velocity: "V 速度",
    transport_components: "输运分量",
    subplot_wind_vs_transport: "风与输运",
    subplot_spiral: "埃克曼螺旋",
    subplot_profile: "随深度变化的速度",
    subplot_components: "输运分量",
    wind_stress: "风应力",
    ekman_transport_x: "埃克曼输运 (X)",
    ekman_transport_y: "埃克曼输运 (Y)",
    ekman_depth: "埃克曼深度",
    coriolis_parameter: "科里奥利参数",
    total_transport: "总输运量",
    energy_transfer: "能量传递率",
    transport_direction: "输运方向",
    results_heading: "计算结果",
    calculation_failed: "计算过程中发生错误，请重试。",
};

static JAPANESE: Labels = Labels {
    code: "ja",
    app_title: "エクマン輸送エクスプローラー",
    wind_speed_control: "風速 (m/s)",
    wind_direction_control: "風向",
    latitude_control: "緯度",
    depth_control: "深さ",
    view_control: "表示",
    calculate_button: "計算",
    calculating: "計算中...",
    title_3d: "3D エクマン輸送の可視化",
    title_2d: "2D エクマン輸送の分析",
    plot_title_3d: "エクマン輸送 3D 可視化",
    plot_title_2d: "エクマン輸送 2D 分析",
    axis_east_west: "東-西方向 (m/s)",
    axis_north_south: "南-北方向 (m/s)",
    axis_depth: "深さ (m)",
    depth: "深さ",
    wind: "風",
    transport: "輸送",
    spiral: "エクマン螺旋",
    u_velocity: "U 速度",
    v_velocity: "V 速度",
    transport_components: "輸送成分",
    subplot_wind_vs_transport: "風と輸送",
    subplot_spiral: "エクマン螺旋",
    subplot_profile: "深さ別の速度",
    subplot_components: "輸送成分",
    wind_stress: "風応力",
    ekman_transport_x: "エクマン輸送 (X)",
    ekman_transport_y: "エクマン輸送 (Y)",
    ekman_depth: "エクマン深度",
    coriolis_parameter: "コリオリパラメータ",
    total_transport: "総輸送量",
    energy_transfer: "エネルギー伝達率",
    transport_direction: "輸送方向",
    results_heading: "計算結果",
    calculation_failed: "計算中にエラーが発生しました。もう一度お試しください。",
};

static SPANISH: Labels = Labels {
    code: "es",
    app_title: "Explorador del transporte de Ekman",
    wind_speed_control: "Velocidad del viento (m/s)",
    wind_direction_control: "Dirección del viento",
    latitude_control: "Latitud",
    depth_control: "Profundidad",
    view_control: "Vista",
    calculate_button: "Calcular",
    calculating: "Calculando...",
    title_3d: "Visualización 3D del transporte de Ekman",
    title_2d: "Análisis 2D del transporte de Ekman",
    plot_title_3d: "Transporte de Ekman: visualización 3D",
    plot_title_2d: "Transporte de Ekman: análisis 2D",
    axis_east_west: "Este-Oeste (m/s)",
    axis_north_south: "Norte-Sur (m/s)",
    axis_depth: "Profundidad (m)",
    depth: "Profundidad",
    wind: "Viento",
    transport: "Transporte",
    spiral: "Espiral de Ekman",
    u_velocity: "Velocidad U",
    v_velocity: "Velocidad V",
    transport_components: "Componentes del transporte",
    subplot_wind_vs_transport: "Viento vs transporte",
    subplot_spiral: "Espiral de Ekman",
    subplot_profile: "Velocidad por profundidad",
    subplot_components: "Componentes del transporte",
    wind_stress: "Tensión del viento",
    ekman_transport_x: "Transporte de Ekman (X)",
    ekman_transport_y: "Transporte de Ekman (Y)",
    ekman_depth: "Profundidad de Ekman",
    coriolis_parameter: "Parámetro de Coriolis",
    total_transport: "Transporte total",
    energy_transfer: "Tasa de transferencia de energía",
    transport_direction: "Dirección del transporte",
    results_heading: "Resultados del cálculo",
    calculation_failed: "Se produjo un error durante el cálculo. Inténtelo de nuevo.",
};

static RUSSIAN: Labels = Labels {
    code: "ru",
    app_title: "Исследование экмановского переноса",
    wind_speed_control: "Скорость ветра (м/с)",
    wind_direction_control: "Направление ветра",
    latitude_control: "Широта",
    depth_control: "Глубина",
    view_control: "Вид",
    calculate_button: "Рассчитать",
    calculating: "Расчёт...",
    title_3d: "3D визуализация экмановского переноса",
    title_2d: "2D анализ экмановского переноса",
    plot_title_3d: "Экмановский перенос: 3D визуализация",
    plot_title_2d: "Экмановский перенос: 2D анализ",
    axis_east_west: "Восток-Запад (м/с)",
    axis_north_south: "Север-Юг (м/с)",
    axis_depth: "Глубина (м)",
    depth: "Глубина",
    wind: "Ветер",
    transport: "Перенос",
    spiral: "Спираль Экмана",
    u_velocity: "Скорость U",
    v_velocity: "Скорость V",
    transport_components: "Компоненты переноса",
    subplot_wind_vs_transport: "Ветер и перенос",
    subplot_spiral: "Спираль Экмана",
    subplot_profile: "Скорость по глубине",
    subplot_components: "Компоненты переноса",
    wind_stress: "Напряжение ветра",
    ekman_transport_x: "Экмановский перенос (X)",
    ekman_transport_y: "Экмановский перенос (Y)",
    ekman_depth: "Глубина Экмана",
    coriolis_parameter: "Параметр Кориолиса",
    total_transport: "Полный перенос",
    energy_transfer: "Скорость передачи энергии",
    transport_direction: "Направление переноса",
    results_heading: "Результаты расчёта",
    calculation_failed: "Во время расчёта произошла ошибка. Попробуйте ещё раз.",
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::En => &ENGLISH,
        Language::Ko => &KOREAN,
        Language::Zh => &CHINESE,
        Language::Ja => &JAPANESE,
        Language::Es => &SPANISH,
        Language::Ru => &RUSSIAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Language; 6] = [
        Language::En,
        Language::Ko,
        Language::Zh,
        Language::Ja,
        Language::Es,
        Language::Ru,
    ];

    #[test]
    fn every_language_has_its_own_tag_and_failure_message() {
        let codes: Vec<&str> = ALL.iter().map(|l| labels(*l).code).collect();
        assert_eq!(codes, ["en", "ko", "zh", "ja", "es", "ru"]);

        for language in ALL {
            let text = labels(language);
            assert!(!text.calculation_failed.is_empty());
            assert!(!text.app_title.is_empty());
            if language != Language::En {
                assert_ne!(text.calculation_failed, ENGLISH.calculation_failed);
                assert_ne!(text.title_3d, ENGLISH.title_3d);
            }
        }
    }

    #[test]
    fn language_tag_matches_serde_name() {
        for language in ALL {
            let value = serde_json::to_value(language).unwrap();
            assert_eq!(value, labels(language).code);
        }
    }
}
