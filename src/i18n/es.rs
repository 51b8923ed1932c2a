use super::dictionary::*;

pub static ES: Translations = Translations {
	meta: Meta {
		title: "IM3 Systems | Desarrollo de software, automatización e inteligencia artificial para empresas",
		booking_title: "Agendar Diagnóstico | IM3 Systems",
		confirmed_title: "Sesión Confirmada | IM3 Systems",
		not_found_title: "Página no encontrada | IM3 Systems",
	},
	nav: Nav {
		what_we_do: "Qué hacemos",
		how_we_work: "Cómo trabajamos",
		for_whom: "Para quién",
		request_diagnosis: "Solicitar diagnóstico gratis",
		spanish: "Español",
		english: "English",
		dark_mode: "Cambiar tema",
		menu: "Menú",
	},
	hero: Hero {
		badge: "IM3 · SISTEMAS OPERATIVOS",
		headline: "Sistemas confiables para operar sin fricción",
		subheadline: "Reduce horas de trabajo manual, errores y caos operativo con sistemas hechos a tu medida.",
		cta: "Solicitar diagnóstico gratis",
		secondary: "Ver qué hacemos",
		badges: &[
			"Apps internas",
			"Automatización",
			"Integraciones",
			"Dashboards",
			"IA aplicada",
			"Sistemas mantenibles",
		],
	},
	priorities: Priorities {
		title: "Lo que priorizamos",
		subtitle: "Convertimos la tecnología en una herramienta práctica para mejorar tus procesos, ahorrar tiempo y hacer crecer tu empresa.",
		flow: &["Orden", "Claridad", "Resultados"],
		clear_execution: "Ejecución clara",
		clear_execution_desc: "Objetivos definidos desde el inicio para que sepas qué vas a lograr y cómo impacta tu negocio.",
		structure: "Estructura sólida",
		structure_desc: "Organizamos procesos y sistemas para que tu operación sea más eficiente y fácil de escalar.",
		maintainable: "Soluciones mantenibles",
		maintainable_desc: "Te entregamos herramientas claras, documentadas y listas para que tu equipo las use sin complicaciones.",
	},
	logo_strip: LogoStrip {
		title: "Empresas que confían en sistemas IM3",
	},
	credibility: Credibility {
		systems: "12+",
		systems_label: "Sistemas implementados",
		industries: "6",
		industries_label: "Industrias",
		conversion: "100%",
		conversion_label: "De diagnósticos continúan a implementación",
	},
	services: Services {
		title: "Sistemas internos que ordenan la operación",
		subtitle: "Construimos soluciones a medida para reducir fricción, centralizar información y ejecutar mejor.",
		internal_apps: "Aplicaciones internas",
		internal_apps_desc: "Herramientas a medida para control operativo, reportes, checklists, registros y flujos internos.",
		automation: "Automatización",
		automation_desc: "Conectamos tus apps y datos para eliminar tareas repetitivas y reducir errores en el día a día.",
		control_systems: "Sistemas de control",
		control_systems_desc: "Dashboards, conciliaciones, alertas y auditoría: visibilidad real para decisiones mejores.",
	},
	lead_magnet: LeadMagnet {
		badge: "SIN COSTO",
		title: "Diagnóstico operativo inicial",
		description: "Analizamos tu operación, detectamos cuellos de botella y te entregamos un mapa claro de qué sistema implementar, por qué y en qué orden.",
		cta: "Solicitar diagnóstico gratis",
	},
	process: Process {
		title: "Cómo trabajamos contigo",
		steps: &[
			Step {
				num: "01",
				title: "Diagnóstico estratégico",
				text: "Analizamos tu operación, entendemos tu negocio, detectamos oportunidades y puntos críticos, definimos el sistema, procesos y herramientas que realmente necesitas.",
			},
			Step {
				num: "02",
				title: "Desarrollo de la solución",
				text: "Diseñamos y construimos el sistema a medida: interfaces, automatizaciones, integraciones y flujos adaptados a cómo funciona tu equipo en el día a día.",
			},
			Step {
				num: "03",
				title: "Implementación",
				text: "Lo integramos directamente en tu operación real, migramos datos, conectamos herramientas existentes y validamos que todo funcione antes de salir en vivo.",
			},
			Step {
				num: "04",
				title: "Entrega y acompañamiento",
				text: "Te dejamos todo documentado, entrenamos a tu equipo, y te acompañamos las primeras semanas para asegurar una adopción sin fricciones.",
			},
		],
	},
	target_audience: TargetAudience {
		title: "PYMEs con operación real",
		subtitle: "Especialmente equipos que necesitan orden y control, no más herramientas sueltas.",
		fits_you_if: "Encaja contigo si...",
		fits_items: &[
			"Tu operación depende de personas y WhatsApp, pero necesitas estructura.",
			"Hay reportes manuales, cierres, conciliaciones o auditorías que toman horas.",
			"Tienes varias apps, pero no están conectadas (Sheets, POS, CRM, etc.).",
			"Quieres un sistema mantenible, no un proyecto eterno.",
		],
		not_for_you: "No somos para...",
		not_for_items: &[
			"Empresas que buscan una solución genérica sin entender su operación.",
			"Proyectos sin dueño interno o sin intención de usar el sistema.",
			"Implementaciones genéricas tipo 'copia y pega'.",
			"Soluciones que se rompen por no documentar procesos.",
		],
	},
	testimonials: Testimonials {
		title: "Resultados que hablan por sí solos",
		subtitle: "Casos reales de impacto operativo.",
		reviews: &[
			Review {
				quote: "Logramos reducir el tiempo de cierre de 4 días a 4 horas.",
				author: "Laura Méndez",
				role: "Operaciones · Bodega 72",
			},
			Review {
				quote: "Pasamos de perder 8% del inventario por errores manuales a menos del 0.5%. Por fin tenemos visibilidad real.",
				author: "Carlos Rojas",
				role: "Admin · CasaMesa",
			},
			Review {
				quote: "En 2 semanas el equipo ya operaba sin soporte. Antes tardábamos meses en adoptar herramientas nuevas.",
				author: "Paula Andrade",
				role: "Dirección · Quanta",
			},
		],
	},
	offer: Offer {
		title: "Modelos de Trabajo",
		subtitle: "Después del diagnóstico, definimos juntos la mejor forma de avanzar.",
		full_implementation: "Implementación completa",
		full_implementation_tag: "(Done For You)",
		full_implementation_desc: "Nos encargamos de todo. Diseñamos, construimos y te entregamos el sistema funcionando, llave en mano. Tu equipo solo se preocupa de usarlo.",
		full_implementation_benefit: "Ideal si buscas velocidad y garantía de ejecución.",
		strategic_guidance: "Acompañamiento estratégico",
		strategic_guidance_tag: "(Consultoría + Diseño)",
		strategic_guidance_desc: "Diseñamos la arquitectura y guiamos a tu equipo técnico (o externo) para que ellos construyan con nuestro mapa y supervisión de calidad.",
		strategic_guidance_benefit: "Ideal si ya tienes capacidad técnica pero te falta dirección.",
		no_sales_pressure: "Sin presión de venta",
		no_sales_pressure_desc: "El objetivo del diagnóstico es entender tu operación. Si podemos ayudar, te presentaremos estas opciones. Si no, te daremos una recomendación honesta.",
		schedule_conversation: "Solicitar diagnóstico gratis",
	},
	faq: Faq {
		title: "Preguntas frecuentes",
		subtitle: "Lo que necesitas saber antes de dar el primer paso.",
		items: &[
			FaqItem {
				question: "¿Cuánto toma una implementación típica?",
				answer: "Depende del alcance, pero un MVP funcional suele estar listo en 4 a 8 semanas. Empezamos con lo que más impacta tu operación y vamos iterando.",
			},
			FaqItem {
				question: "¿Qué pasa si mi equipo no es técnico?",
				answer: "No necesitas equipo técnico. Diseñamos todo para que sea fácil de usar. Además, entregamos documentación y capacitación para que tu equipo opere sin depender de nosotros.",
			},
			FaqItem {
				question: "¿Qué tecnologías usan?",
				answer: "Usamos las herramientas que mejor se adapten a tu caso: desde apps web modernas hasta integraciones con las plataformas que ya usas (Google Sheets, CRMs, POS, etc.).",
			},
			FaqItem {
				question: "¿Cuál es el rango de inversión?",
				answer: "Cada proyecto es diferente. El diagnóstico inicial es gratuito y al final te entregamos una propuesta clara con alcance, tiempos y costos definidos. Sin sorpresas.",
			},
			FaqItem {
				question: "¿El diagnóstico tiene algún costo o compromiso?",
				answer: "No. El diagnóstico es 100% gratuito y sin compromiso. Si después de entender tu operación podemos ayudar, te presentamos opciones. Si no, te damos una recomendación honesta.",
			},
		],
	},
	contact: Contact {
		title: "¿Dónde se está perdiendo tiempo o control en tu operación?",
		subtitle: "Una conversación corta para entender tu caso y proponer el siguiente paso.",
		schedule_call: "Solicitar diagnóstico gratis",
		back_to_top: "Volver arriba",
	},
	footer: Footer {
		copyright: "IM3 Systems",
		what_we_do: "Qué hacemos",
		how_we_work: "Cómo trabajamos",
		for_whom: "Para quién",
		diagnosis: "Diagnóstico gratis",
		faq: "Preguntas frecuentes",
		privacy_policy: "Política de privacidad",
	},
	living: Living {
		badge: "IM3 · SISTEMAS VIVOS",
		headline: "Sistemas de software aplicados a la operación.",
		intro: "Interrumpe el sistema para entenderlo.",
		hint: "Arrastra nodos, añade herramientas (+) o rediseña la estructura.",
		cta: "Agendar diagnóstico operativo",
		reset: "Reiniciar sistema",
		add_tool: "Añadir herramienta",
		redesign: "Rediseñar",
		complexity_up: "La complejidad aumentó. Nuevas dependencias creadas.",
		tradeoff: "Automatización local: Se aceleró un proceso, pero surgió fricción en otro.",
		local_flow: "Flujo optimizado localmente.",
		redesigned: "Sistema rediseñado: Topología simplificada y mantenible.",
		closing: "El control no se compra. Se diseña.",
	},
	dashboard: Dashboard {
		title: "OPS CENTER",
		online: "EN LÍNEA",
		efficiency: "Eficiencia",
		uptime: "Uptime",
		tasks: "Tareas",
		throughput: "Flujo de procesos",
		recent: "Actividad Reciente",
		resolve: "RESOLVER",
		footer: "Vista en tiempo real del sistema operativo",
		automation: "Automatización",
		alert: "Alerta",
		report: "Reporte",
		system: "Sistema",
		task_titles: &[
			"Sincronización de Inventario",
			"Stock bajo: Ref. 4829",
			"Cierre diario generado",
			"Backup base de datos",
		],
		task_ages: &["Hace 2m", "Ahora", "Hace 5m", "Hace 15m"],
		log_lines: &[
			"pedido #8812 conciliado",
			"webhook POS recibido",
			"reporte semanal enviado",
			"alerta de stock resuelta",
			"sincronización CRM completa",
		],
	},
	booking: Booking {
		badge: "Sesión Estratégica",
		headline: "Diagnóstico de IA",
		headline_accent: "y Tecnología",
		duration: "30 minutos · Evaluación técnica",
		details_title: "Detalles de la sesión",
		details_subtitle: "Lo que cubriremos en la llamada",
		goal_title: "El Objetivo",
		goal_text: "Identificar oportunidades concretas donde la Inteligencia Artificial y la tecnología moderna pueden optimizar tus operaciones empresariales. Sin generalidades.",
		deliverable_title: "Entregable Directo",
		deliverable_text: "Te diremos exactamente qué procesos se pueden automatizar hoy y qué tecnologías son viables para tu infraestructura actual.",
		focus_title: "Enfoque de la sesión",
		focus_items: &[
			"Casos de uso reales de IA en tu sector",
			"Análisis de viabilidad técnica",
			"Roadmap de implementación sugerido",
		],
		disclaimer: "Si no vemos una aplicación clara de tecnología para tu caso, te lo diremos.",
		disclaimer_accent: "Diagnóstico técnico, no comercial.",
		iframe_title: "Calendario de reservas IM3 Systems",
		auto_confirm: "Confirmación automática vía email.",
	},
	confirmed: Confirmed {
		status: "Confirmado",
		verified: "Verificado",
		reference: "CONFIRMACIÓN #2401-OP",
		headline: "Tu diagnóstico operativo está confirmado.",
		lead: "Una conversación técnica para entender tu operación y evaluar si tiene sentido diseñar un sistema.",
		start_briefing: "Iniciar Briefing",
		read_protocol: "Leer protocolo de sesión",
		session_heading: "La Sesión",
		session_items: &[
			"Entender el contexto operativo actual",
			"Profundizar en uno o dos puntos de fricción reales",
			"Mostrar posibles caminos técnicos",
			"Definir el siguiente paso solo si tiene sentido",
		],
		session_note: "No es una demo. No es ventas.",
		method_heading: "Metodología",
		anti_pattern: "ANTI-PATRÓN",
		anti_pattern_text: "No vendemos herramientas empaquetadas ni prometemos resultados mágicos inmediatos.",
		core_value: "CORE VALUE",
		core_value_text: "Diseñamos estructuras de software a medida que reducen la fricción, los errores y la dependencia operativa.",
		core_tags: &["Apps a medida", "Automatizaciones"],
		scope_heading: "Alcance",
		systems: &[
			SystemCard {
				id: "SYS-05",
				title: "Apps a Medida",
				glyph: SystemGlyph::Control,
			},
			SystemCard {
				id: "SYS-01",
				title: "Control Operativo",
				glyph: SystemGlyph::Control,
			},
			SystemCard {
				id: "SYS-02",
				title: "Automatización",
				glyph: SystemGlyph::Automation,
			},
			SystemCard {
				id: "SYS-03",
				title: "Registro & Tracking",
				glyph: SystemGlyph::Tracking,
			},
			SystemCard {
				id: "SYS-04",
				title: "Dashboards",
				glyph: SystemGlyph::Dashboard,
			},
		],
		scope_note: "Cada sistema es distinto. El alcance se define después del diagnóstico.",
		prework_heading: "Pre-Work",
		inputs_title: "Requerimientos de entrada",
		inputs_text: "No necesitas preparar presentaciones. Solo necesitamos tu experiencia directa sobre la operación actual.",
		checklist_label: "Checklist de discusión:",
		checklist_items: &[
			"Dónde sientes mayor fricción hoy",
			"Qué tareas generan más reproceso",
			"Qué información crítica falta",
		],
		transmission_title: "Material de estudio",
		transmission_text: "Recibirás una serie de correos previos a nuestra llamada. Contienen información técnica valiosa para maximizar el tiempo de nuestra sesión. Recomendamos su lectura.",
		intel_heading: "Intelligence",
		channel_title: "Canal de Investigación",
		channel_text: "Accede a nuestro contenido público sobre arquitectura de sistemas y eficiencia operativa.",
		farewell: "Nos vemos en la sesión.",
		farewell_sub: "Diagnóstico Operativo Inicial",
		tagline: "Sistemas de software aplicados a la operación",
	},
	not_found: NotFound {
		message: "La página que buscas no existe o fue movida.",
		back_home: "Volver al inicio",
	},
};
